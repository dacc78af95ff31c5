//! The `<url>` type.

use super::ToCss;
use super::string::write_string;

/// A `url("…")` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url(String);

impl Url {
    pub fn new(url: impl Into<String>) -> Self {
        Url(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToCss for Url {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("url(");
        write_string(buf, &self.0);
        buf.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(Url::new("img.png").to_css_string(), "url(\"img.png\")");
        assert_eq!(
            Url::new("a \"b\".png").to_css_string(),
            "url(\"a \\\"b\\\".png\")"
        );
    }
}
