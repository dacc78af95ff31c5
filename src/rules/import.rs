//! Statement at-rules: `@import`, `@namespace` and `@charset`.

use super::layer::LayerName;
use super::media::Media;
use super::supports::Supports;
use super::write_statement;
use crate::values::string::write_string;
use crate::values::{CustomIdent, ToCss, Url};

/// The `layer` clause of an `@import`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportLayer {
    /// `layer`, an anonymous layer.
    Anonymous,
    /// `layer(name)`
    Named(LayerName),
}

/// `@import url(...) layer? supports(...)? <media-query-list>?;`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRule {
    url: Url,
    layer: Option<ImportLayer>,
    supports: Option<Supports>,
    media: Option<Media>,
}

impl ImportRule {
    pub fn new(url: impl Into<String>) -> Self {
        ImportRule {
            url: Url::new(url),
            layer: None,
            supports: None,
            media: None,
        }
    }

    pub fn layer(self, layer: ImportLayer) -> Self {
        ImportRule {
            layer: Some(layer),
            ..self
        }
    }

    pub fn supports(self, supports: Supports) -> Self {
        ImportRule {
            supports: Some(supports),
            ..self
        }
    }

    pub fn media(self, media: Media) -> Self {
        ImportRule {
            media: Some(media),
            ..self
        }
    }
}

impl ToCss for ImportRule {
    fn to_css(&self, buf: &mut String) {
        write_statement(buf, "import", |buf| {
            self.url.to_css(buf);
            match &self.layer {
                Some(ImportLayer::Anonymous) => buf.push_str(" layer"),
                Some(ImportLayer::Named(name)) => {
                    buf.push_str(" layer(");
                    name.to_css(buf);
                    buf.push(')');
                }
                None => {}
            }
            if let Some(supports) = &self.supports {
                buf.push_str(" supports(");
                supports.write_import_condition(buf);
                buf.push(')');
            }
            if let Some(media) = &self.media {
                buf.push(' ');
                media.write_queries(buf);
            }
        });
    }
}

/// `@namespace prefix? url(...);`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceRule {
    pub prefix: Option<CustomIdent>,
    pub url: Url,
}

impl NamespaceRule {
    /// The default namespace.
    pub fn new(url: impl Into<String>) -> Self {
        NamespaceRule {
            prefix: None,
            url: Url::new(url),
        }
    }

    pub fn prefixed(prefix: CustomIdent, url: impl Into<String>) -> Self {
        NamespaceRule {
            prefix: Some(prefix),
            url: Url::new(url),
        }
    }
}

impl ToCss for NamespaceRule {
    fn to_css(&self, buf: &mut String) {
        write_statement(buf, "namespace", |buf| {
            if let Some(prefix) = &self.prefix {
                prefix.to_css(buf);
                buf.push(' ');
            }
            self.url.to_css(buf);
        });
    }
}

/// `@charset "encoding";`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharsetRule(String);

impl CharsetRule {
    pub fn new(encoding: impl Into<String>) -> Self {
        CharsetRule(encoding.into())
    }

    pub fn utf8() -> Self {
        CharsetRule::new("UTF-8")
    }

    pub fn encoding(&self) -> &str {
        &self.0
    }
}

impl ToCss for CharsetRule {
    fn to_css(&self, buf: &mut String) {
        write_statement(buf, "charset", |buf| write_string(buf, &self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::layout::Display;
    use crate::rules::media::{MediaFeature, Orientation};
    use crate::values::Length;

    #[test]
    fn test_import() {
        assert_eq!(
            ImportRule::new("reset.css").to_css_string(),
            "@import url(\"reset.css\");"
        );

        let full = ImportRule::new("theme.css")
            .layer(ImportLayer::Named(CustomIdent::new("theme").unwrap().into()))
            .supports(Supports::declaration(&Display::Grid))
            .media(Media::screen().and(MediaFeature::min_width(Length::px(600.0))));
        assert_eq!(
            full.to_css_string(),
            "@import url(\"theme.css\") layer(theme) supports(display:grid) \
             screen and (min-width: 600px);"
        );
    }

    #[test]
    fn test_import_compound_supports_and_anonymous_layer() {
        let supports = Supports::declaration(&Display::Grid).not();
        let rule = ImportRule::new("fallback.css")
            .layer(ImportLayer::Anonymous)
            .supports(supports)
            .media(Media::print() | Media::feature(MediaFeature::orientation(Orientation::Portrait)));
        assert_eq!(
            rule.to_css_string(),
            "@import url(\"fallback.css\") layer supports(not (display:grid)) \
             print, (orientation: portrait);"
        );
    }

    #[test]
    fn test_namespace() {
        assert_eq!(
            NamespaceRule::new("http://www.w3.org/1999/xhtml").to_css_string(),
            "@namespace url(\"http://www.w3.org/1999/xhtml\");"
        );
        let svg = NamespaceRule::prefixed(
            CustomIdent::new("svg").unwrap(),
            "http://www.w3.org/2000/svg",
        );
        assert_eq!(
            svg.to_css_string(),
            "@namespace svg url(\"http://www.w3.org/2000/svg\");"
        );
    }

    #[test]
    fn test_charset() {
        assert_eq!(CharsetRule::utf8().to_css_string(), "@charset \"UTF-8\";");
        assert_eq!(CharsetRule::new("iso-8859-15").encoding(), "iso-8859-15");
    }
}
