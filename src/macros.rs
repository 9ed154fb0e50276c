/// Builds a [`PsValue`](crate::PsValue) with JSON-like syntax.
///
/// ```rust
/// use serde_psdata::{psdata, PsValue};
///
/// let value = psdata!({
///     "name": "hello world",
///     "tags": ["a", "b"],
///     "meta": null
/// });
/// assert_eq!(value.to_string(), r#"@{name = "hello world" tags = @("a" "b") meta = $null}"#);
/// ```
#[macro_export]
macro_rules! psdata {
    (null) => {
        $crate::PsValue::Null
    };

    (true) => {
        $crate::PsValue::Bool(true)
    };

    (false) => {
        $crate::PsValue::Bool(false)
    };

    ([]) => {
        $crate::PsValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::PsValue::Array(vec![$($crate::psdata!($elem)),*])
    };

    ({}) => {
        $crate::PsValue::Object($crate::PsMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::PsMap::new();
        $(
            object.insert($key.to_string(), $crate::psdata!($value));
        )*
        $crate::PsValue::Object(object)
    }};

    // Anything else goes through Serialize.
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::PsValue::Null)
    };
}
