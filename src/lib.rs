//! # csstype
//!
//! Strongly-typed CSS values that serialize to CSS text.
//!
//! ## Features
//!
//! - Primitive and composite values ([`values`]): lengths, colors, angles,
//!   positions, shadows, gradients, ...
//! - One type per CSS property ([`properties`]), each accepting the CSS-wide
//!   keywords and reporting its property name
//! - Declarations and declaration blocks ([`declaration`])
//! - Selectors ([`selector`])
//! - At-rules and style rules ([`rules`]), including the `@media`,
//!   `@supports` and `@container` condition algebras
//!
//! Values are immutable; every operation returns a new value. Constructors
//! that can receive invalid input return [`Result`]; serialization never
//! fails.
//!
//! ## Quick Start
//!
//! ```
//! use csstype::properties::background::BackgroundColor;
//! use csstype::rules::{Media, MediaFeature};
//! use csstype::{Color, Length, Property, ToCss};
//!
//! let declaration = BackgroundColor::new(Color::rgba(255, 0, 0, 0.5)).declaration();
//! assert_eq!(declaration.to_css_string(), "background-color:rgba(255, 0, 0, 0.5)");
//!
//! let media = Media::screen().and(MediaFeature::min_width(Length::px(300.0)));
//! assert_eq!(media.to_css_string(), "@media screen and (min-width: 300px)");
//! ```
//!
//! ## Global keywords
//!
//! ```
//! use csstype::properties::border::BorderCollapse;
//! use csstype::{GlobalKeyword, Property, ToCss};
//!
//! let value = BorderCollapse::global(GlobalKeyword::RevertLayer);
//! assert_eq!(value.to_css_string(), "revert-layer");
//! assert_eq!(value.name(), "border-collapse");
//! ```

pub mod declaration;
pub mod error;
pub mod properties;
pub mod rules;
pub mod selector;
pub mod values;

pub use declaration::{Declaration, DeclarationBlock};
pub use error::{Error, Result};
pub use properties::{GlobalKeyword, Property};
pub use rules::CssRule;
pub use selector::{Selector, SelectorList};
pub use values::{
    Angle, Color, CustomIdent, DashedIdent, Length, LengthPercentage, NamedColor, Percentage,
    ToCss, Time,
};
