//! Configuration for reading and writing PowerShell data text.
//!
//! - [`ParseOptions`]: parser hardening (nesting depth limit)
//! - [`WriteOptions`]: output layout (compact or pretty, indentation width)
//!
//! ## Examples
//!
//! ```rust
//! use serde_psdata::{to_string_with_options, WriteOptions};
//!
//! let options = WriteOptions::pretty().with_indent(2);
//! let text = to_string_with_options(&vec![1, 2], options).unwrap();
//! assert_eq!(text, "@(\n  1\n  2\n)");
//! ```

/// Default nesting limit applied by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling the parser.
///
/// Parsing recurses once per nested collection, so deeply nested untrusted
/// input is bounded by `max_depth`. Set it to `None` to parse without a limit.
///
/// # Examples
///
/// ```rust
/// use serde_psdata::ParseOptions;
///
/// let options = ParseOptions::new().with_max_depth(Some(16));
/// assert_eq!(options.max_depth, Some(16));
/// assert_eq!(ParseOptions::unbounded().max_depth, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with no nesting limit.
    #[must_use]
    pub fn unbounded() -> Self {
        ParseOptions { max_depth: None }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options controlling text output.
///
/// Compact output puts a whole document on one line with elements separated
/// by single spaces. Pretty output places each entry on its own line,
/// indented by `indent` spaces per level.
///
/// # Examples
///
/// ```rust
/// use serde_psdata::WriteOptions;
///
/// let options = WriteOptions::new();
/// assert_eq!(options.indent, 4);
/// assert!(!options.pretty);
/// assert!(WriteOptions::pretty().pretty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 4,
            pretty: false,
        }
    }
}

impl WriteOptions {
    /// Creates default options (compact, 4-space indent when pretty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for multi-line output.
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
