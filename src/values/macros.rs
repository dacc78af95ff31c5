//! Macros shared by the value and property modules.

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// Inspired by lightningcss's `enum_property!` macro, this reduces boilerplate
/// for enums that map directly to CSS keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Line style keywords.
///     pub enum LineStyle {
///         None => "none",
///         Solid => "solid",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
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
        }

        impl $name {
            /// Every keyword of this enum, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

/// Defines a dimension: a number paired with a unit from a closed unit enum.
///
/// Generates the unit enum (through [`enum_property!`]), the value struct,
/// one constructor per unit and the `ToCss`/`Sign` impls. Only the units
/// listed for a dimension can ever be attached to it.
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($unit:ident) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal as $ctor:ident
            ),* $(,)?
        }
    ) => {
        $crate::values::enum_property! {
            #[doc = concat!("Units accepted by [`", stringify!($name), "`].")]
            pub enum $unit {
                $(
                    $(#[$variant_meta])*
                    $variant => $css,
                )*
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            value: f32,
            unit: $unit,
        }

        impl $name {
            pub const fn new(value: f32, unit: $unit) -> Self {
                Self { value, unit }
            }

            $(
                #[doc = concat!("A value in `", $css, "`.")]
                pub const fn $ctor(value: f32) -> Self {
                    Self::new(value, $unit::$variant)
                }
            )*

            pub fn value(&self) -> f32 {
                self.value
            }

            pub fn unit(&self) -> $unit {
                self.unit
            }
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                $crate::values::write_dimension(buf, self.value, self.unit.as_str());
            }
        }

        impl $crate::values::Sign for $name {
            const KIND: &'static str = stringify!($name);

            fn numeric_value(&self) -> f32 {
                self.value
            }
        }
    };
}

pub(crate) use dimension;
pub(crate) use enum_property;
