//! The `<string>` type.

use super::ToCss;

/// Write `value` as a double-quoted, escaped CSS string.
pub(crate) fn write_string(buf: &mut String, value: &str) {
    // Writing into a String cannot fail
    let _ = cssparser::serialize_string(value, buf);
}

/// A `<string>`. Serialized double-quoted with CSS escapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssString(String);

impl CssString {
    pub fn new(value: impl Into<String>) -> Self {
        CssString(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CssString {
    fn from(value: &str) -> Self {
        CssString::new(value)
    }
}

impl From<String> for CssString {
    fn from(value: String) -> Self {
        CssString(value)
    }
}

impl ToCss for CssString {
    fn to_css(&self, buf: &mut String) {
        write_string(buf, &self.0);
    }
}
