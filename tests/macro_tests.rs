use serde_psdata::{parse, psdata, PsMap, PsValue};

#[test]
fn test_psdata_macro_null() {
    let value = psdata!(null);
    assert_eq!(value, PsValue::Null);
}

#[test]
fn test_psdata_macro_booleans() {
    assert_eq!(psdata!(true), PsValue::Bool(true));
    assert_eq!(psdata!(false), PsValue::Bool(false));
}

#[test]
fn test_psdata_macro_numbers() {
    assert_eq!(psdata!(42), PsValue::Number(42.0));
    assert_eq!(psdata!(3.5), PsValue::Number(3.5));
    assert_eq!(psdata!(-123), PsValue::Number(-123.0));
}

#[test]
fn test_psdata_macro_strings() {
    assert_eq!(psdata!("hello world"), PsValue::String("hello world".to_string()));
    assert_eq!(psdata!(""), PsValue::String(String::new()));
}

#[test]
fn test_psdata_macro_arrays() {
    assert_eq!(psdata!([]), PsValue::Array(vec![]));

    let mixed = psdata!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        PsValue::Array(vec![
            PsValue::Number(1.0),
            PsValue::String("hello".to_string()),
            PsValue::Bool(true),
            PsValue::Null,
        ])
    );
}

#[test]
fn test_psdata_macro_objects() {
    assert_eq!(psdata!({}), PsValue::Object(PsMap::new()));

    let object = psdata!({
        "name": "Alice",
        "age": 30
    });
    let map = object.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&PsValue::from("Alice")));
    assert_eq!(map.get("age"), Some(&PsValue::Number(30.0)));
}

#[test]
fn test_psdata_macro_matches_parsed_text() {
    let built = psdata!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "meta": null
    });
    let parsed = parse(
        r#"@{
            user = @{ id = 123 name = "Bob" active = $true }
            tags = @("admin" "developer")
            meta = $null
        }"#,
    )
    .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_value_predicates() {
    let null_val = psdata!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = psdata!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = psdata!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = psdata!([1, 2, 3]);
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));

    let obj_val = psdata!({"key": "value"});
    assert_eq!(obj_val.as_object().map(PsMap::len), Some(1));
}

#[test]
fn test_display_uses_notation() {
    assert_eq!(psdata!([1, "a", null]).to_string(), r#"@(1 "a" $null)"#);
    // Negative numbers have no literal form, so Display falls back to Debug.
    assert_eq!(psdata!(-1).to_string(), "Number(-1.0)");
}
