//! Macros that generate property types from declarative tables.
//!
//! Every generated type carries one `Global(GlobalKeyword)` arm and
//! implements [`Property`](super::Property) with the CSS name as `NAME`.

/// Defines a property whose value grammar is a closed set of keywords.
///
/// # Example
///
/// ```ignore
/// keyword_property! {
///     /// The `box-sizing` property.
///     pub enum BoxSizing: "box-sizing" {
///         ContentBox => "content-box",
///         BorderBox => "border-box",
///     }
/// }
/// ```
macro_rules! keyword_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $css_name:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Global($crate::properties::GlobalKeyword),
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                match self {
                    $($name::$variant => buf.push_str($css),)*
                    $name::Global(keyword) => buf.push_str(keyword.as_str()),
                }
            }
        }

        impl $crate::properties::Property for $name {
            const NAME: &'static str = $css_name;

            fn global(keyword: $crate::properties::GlobalKeyword) -> Self {
                $name::Global(keyword)
            }
        }

        impl From<$crate::properties::GlobalKeyword> for $name {
            fn from(keyword: $crate::properties::GlobalKeyword) -> Self {
                $name::Global(keyword)
            }
        }
    };
}

/// Defines properties that wrap a single value type.
///
/// # Example
///
/// ```ignore
/// value_property! {
///     /// The `background-color` property.
///     pub BackgroundColor: "background-color" => Color;
/// }
/// ```
macro_rules! value_property {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $name:ident : $css_name:literal => $value:ty;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            $vis enum $name {
                Value($value),
                Global($crate::properties::GlobalKeyword),
            }

            impl $name {
                pub fn new(value: impl Into<$value>) -> Self {
                    $name::Value(value.into())
                }
            }

            impl From<$value> for $name {
                fn from(value: $value) -> Self {
                    $name::Value(value)
                }
            }

            impl $crate::values::ToCss for $name {
                fn to_css(&self, buf: &mut String) {
                    match self {
                        $name::Value(value) => $crate::values::ToCss::to_css(value, buf),
                        $name::Global(keyword) => buf.push_str(keyword.as_str()),
                    }
                }
            }

            impl $crate::properties::Property for $name {
                const NAME: &'static str = $css_name;

                fn global(keyword: $crate::properties::GlobalKeyword) -> Self {
                    $name::Global(keyword)
                }
            }

            impl From<$crate::properties::GlobalKeyword> for $name {
                fn from(keyword: $crate::properties::GlobalKeyword) -> Self {
                    $name::Global(keyword)
                }
            }
        )+
    };
}

pub(crate) use keyword_property;
pub(crate) use value_property;
