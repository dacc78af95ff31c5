//! Benchmarks for CSS serialization.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use csstype::properties::background::BackgroundColor;
use csstype::properties::box_model::{Margin, Padding};
use csstype::properties::effects::BoxShadow;
use csstype::properties::layout::Display;
use csstype::properties::text::ColorProperty;
use csstype::rules::media::Orientation;
use csstype::rules::{Media, MediaFeature, StyleRule};
use csstype::selector::{Combinator, Compound, PseudoClassKeyword, Selector, SelectorList};
use csstype::values::{Shadow, write_number};
use csstype::{Color, CssRule, DeclarationBlock, Length, NamedColor, Percentage, Property, ToCss};

fn sample_rule() -> CssRule {
    let selectors = SelectorList::new([
        Selector::new(Compound::element("nav").unwrap())
            .combine(Combinator::Child, Compound::new().class("item").unwrap())
            .descendant(Compound::element("a").unwrap().pseudo_class(PseudoClassKeyword::Hover)),
        Selector::new(Compound::new().class("button").unwrap()),
    ])
    .unwrap();
    let declarations = DeclarationBlock::new()
        .declare(&Display::Flex)
        .declare(&BackgroundColor::new(Color::rgba(20, 40, 60, 0.8)))
        .declare(&ColorProperty::new(NamedColor::White))
        .declare(&Margin::length_percentage(Percentage::new(5.0)))
        .declare(&Padding::length_percentage(Length::rem(0.75)).unwrap())
        .declare(&BoxShadow::layers([Shadow::new(Length::px(0.0), Length::px(1.0))
            .blur(Length::px(3.0))
            .unwrap()
            .color(Color::rgba(0, 0, 0, 0.3))]));
    let media = (Media::screen() & MediaFeature::min_width(Length::px(768.0)))
        | (Media::print() & MediaFeature::orientation(Orientation::Landscape));
    media.block([StyleRule::new(selectors, declarations)]).into()
}

// ============================================================================
// Value Benchmarks
// ============================================================================

fn bench_numbers(c: &mut Criterion) {
    c.bench_function("write_number", |b| {
        let mut buf = String::with_capacity(64);
        b.iter(|| {
            buf.clear();
            for value in [0.0, 1.5, -12.25, 1e-7, 1e10, 0.333_333] {
                write_number(&mut buf, black_box(value));
                buf.push(' ');
            }
        });
    });
}

fn bench_declaration(c: &mut Criterion) {
    let value = BackgroundColor::new(Color::rgba(255, 0, 0, 0.5));
    c.bench_function("declaration", |b| {
        b.iter(|| black_box(&value).declaration().to_css_string());
    });
}

// ============================================================================
// Rule Benchmarks
// ============================================================================

fn bench_media_rule(c: &mut Criterion) {
    let rule = sample_rule();
    c.bench_function("media_rule", |b| {
        b.iter(|| black_box(&rule).to_css_string());
    });
}

fn bench_build_and_serialize(c: &mut Criterion) {
    c.bench_function("build_and_serialize", |b| {
        b.iter(|| sample_rule().to_css_string());
    });
}

criterion_group!(
    benches,
    bench_numbers,
    bench_declaration,
    bench_media_rule,
    bench_build_and_serialize,
);
criterion_main!(benches);
