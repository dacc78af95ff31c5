//! End-to-end serialization through the public API.

use csstype::properties::background::BackgroundColor;
use csstype::properties::border::{BorderColor, BorderSpacing};
use csstype::properties::box_model::{Margin, Padding};
use csstype::properties::effects::BoxShadow;
use csstype::properties::flex::{AlignItems, Gap};
use csstype::properties::font::{FamilyName, FontFamily, FontSize, FontWeight, GenericFamily};
use csstype::properties::layout::Display;
use csstype::properties::outline::OutlineWidth;
use csstype::properties::text::ColorProperty;
use csstype::rules::media::Orientation;
use csstype::rules::{Media, MediaFeature, StyleRule, Supports};
use csstype::selector::{Compound, PseudoClassKeyword};
use csstype::values::{LengthUnit, Rect, Shadow};
use proptest::prelude::*;
use csstype::{
    Color, CssRule, DashedIdent, Declaration, DeclarationBlock, Error, Length, NamedColor, Percentage,
    Property, Selector, SelectorList, ToCss,
};

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_background_color_declaration() {
    let declaration = BackgroundColor::new(Color::rgba(255, 0, 0, 0.5)).declaration();
    assert_eq!(declaration.name(), "background-color");
    assert_eq!(
        declaration.to_css_string(),
        "background-color:rgba(255, 0, 0, 0.5)"
    );
}

#[test]
fn test_margin_percentage() {
    let margin = Margin::length_percentage(Percentage::new(10.0));
    assert_eq!(margin.to_css_string(), "10%");
    assert_eq!(margin.name(), "margin");
}

#[test]
fn test_border_color_sides() {
    let colors = BorderColor::sides(
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Gold,
    );
    assert_eq!(colors.to_css_string(), "red blue green gold");
}

#[test]
fn test_outline_width() {
    assert_eq!(OutlineWidth::thick().to_css_string(), "thick");
    assert_eq!(OutlineWidth::px(5.0).unwrap().to_css_string(), "5px");
    assert!(matches!(
        OutlineWidth::px(-1.0),
        Err(Error::Negative { .. })
    ));
}

#[test]
fn test_zero_keeps_unit() {
    assert_eq!(BorderSpacing::zero().to_css_string(), "0px");
    assert_eq!(Length::px(0.0).to_css_string(), "0px");
}

#[test]
fn test_number_formatting() {
    assert_eq!(Length::px(1.50).to_css_string(), "1.5px");
    assert_eq!(Length::px(10.0).to_css_string(), "10px");
    assert_eq!(Color::rgba(0, 0, 0, 0.25).to_css_string(), "rgba(0, 0, 0, 0.25)");
}

// ============================================================================
// Media queries
// ============================================================================

#[test]
fn test_media_min_width() {
    let media = Media::screen().and(MediaFeature::min_width(Length::px(300.0)));
    assert_eq!(media.to_css_string(), "@media screen and (min-width: 300px)");
}

#[test]
fn test_media_range_chain() {
    let media = Media::screen()
        .and(MediaFeature::min_width(Length::px(768.0)))
        .and(MediaFeature::max_width(Length::px(1200.0)));
    assert_eq!(
        media.to_css_string(),
        "@media screen and (min-width: 768px) and (max-width: 1200px)"
    );
}

#[test]
fn test_media_operators() {
    let media = (Media::screen() & MediaFeature::min_width(Length::px(992.0)))
        | (Media::print() & MediaFeature::orientation(Orientation::Portrait));
    assert_eq!(
        media.to_css_string(),
        "@media screen and (min-width: 992px), print and (orientation: portrait)"
    );
}

#[test]
fn test_media_double_negation() {
    assert_eq!((!!Media::screen()).to_css_string(), "@media not not screen");
}

// ============================================================================
// Rules
// ============================================================================

fn card() -> StyleRule {
    StyleRule::new(
        Compound::new().class("card").unwrap(),
        DeclarationBlock::new()
            .declare(&Display::Flex)
            .declare(&AlignItems::Center)
            .declare(&Gap::length_percentage(Length::rem(1.0)).unwrap())
            .declare(&Padding::length_percentage(Length::px(16.0)).unwrap())
            .declare(&BoxShadow::layers([Shadow::new(Length::px(0.0), Length::px(2.0))
                .blur(Length::px(4.0))
                .unwrap()
                .color(Color::rgba(0, 0, 0, 0.2))])),
    )
}

#[test]
fn test_style_rule() {
    assert_eq!(
        card().to_css_string(),
        ".card { display:flex; align-items:center; gap:1rem; padding:16px; \
         box-shadow:0px 2px 4px rgba(0, 0, 0, 0.2); }"
    );
}

#[test]
fn test_nested_conditional_rules() {
    let hover = StyleRule::new(
        SelectorList::new([Selector::new(
            Compound::new()
                .class("card")
                .unwrap()
                .pseudo_class(PseudoClassKeyword::Hover),
        )])
        .unwrap(),
        DeclarationBlock::new().declare(&ColorProperty::new(NamedColor::Crimson)),
    );
    let rule = Media::screen()
        .and(MediaFeature::min_width(Length::px(600.0)))
        .block([
            CssRule::from(Supports::declaration(&Display::Grid).block([card()])),
            CssRule::from(hover),
        ]);
    assert_eq!(
        rule.to_css_string(),
        "@media screen and (min-width: 600px) { @supports (display:grid) { .card { \
         display:flex; align-items:center; gap:1rem; padding:16px; \
         box-shadow:0px 2px 4px rgba(0, 0, 0, 0.2); } } .card:hover { color:crimson; } }"
    );
}

#[test]
fn test_typography_block() {
    let block = DeclarationBlock::new()
        .declare(
            &FontFamily::families([
                FamilyName::named("Inter"),
                FamilyName::from(GenericFamily::SansSerif),
            ])
            .unwrap(),
        )
        .declare(&FontSize::px(18.0).unwrap())
        .declare(&FontWeight::bold())
        .push(Declaration::custom(
            &DashedIdent::new("--leading").unwrap(),
            &Length::rem(1.6),
        ));
    assert_eq!(
        block.to_css_string(),
        "{ font-family:\"Inter\", sans-serif; font-size:18px; font-weight:bold; --leading:1.6rem; }"
    );
}

// ============================================================================
// Determinism
// ============================================================================

fn length() -> impl Strategy<Value = Length> {
    (proptest::num::f32::ANY, proptest::sample::select(LengthUnit::ALL))
        .prop_map(|(value, unit)| Length::new(value, unit))
}

fn twice(value: &impl ToCss) -> (String, String) {
    (value.to_css_string(), value.to_css_string())
}

proptest! {
    #[test]
    fn prop_length_serialization_is_deterministic(length in length()) {
        let (first, second) = twice(&length);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Length::new(length.value(), length.unit()).to_css_string());
    }

    #[test]
    fn prop_rgba_serialization_is_deterministic(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
        a in proptest::num::f32::ANY,
    ) {
        let (first, second) = twice(&Color::rgba(r, g, b, a));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Color::rgba(r, g, b, a).to_css_string());
    }

    #[test]
    fn prop_rect_serialization_is_deterministic(
        top in length(),
        right in length(),
        bottom in length(),
        left in length(),
    ) {
        let (first, second) = twice(&Rect::new(top, right, bottom, left));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Rect::new(top, right, bottom, left).to_css_string());
    }

    #[test]
    fn prop_media_serialization_is_deterministic(
        min in length(),
        max in length(),
        landscape in any::<bool>(),
    ) {
        let orientation = if landscape { Orientation::Landscape } else { Orientation::Portrait };
        let build = || {
            Media::screen()
                .and(MediaFeature::min_width(min))
                .and(MediaFeature::max_width(max))
                .or(Media::feature(MediaFeature::orientation(orientation)))
        };
        let (first, second) = twice(&build());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, build().to_css_string());
    }
}
