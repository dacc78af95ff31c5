//! Selector serialization tests.

use super::*;
use crate::values::CustomIdent;

fn class(name: &str) -> Compound {
    Compound::new().class(name).unwrap()
}

fn element(name: &str) -> Compound {
    Compound::element(name).unwrap()
}

// ============================================================================
// Compound selectors
// ============================================================================

#[test]
fn test_type_and_universal() {
    assert_eq!(element("div").to_css_string(), "div");
    assert_eq!(Compound::universal().to_css_string(), "*");
    assert_eq!(Compound::new().to_css_string(), "*");
}

#[test]
fn test_ids_and_classes() {
    let compound = element("button")
        .id("submit")
        .unwrap()
        .class("btn")
        .unwrap()
        .class("btn-primary")
        .unwrap();
    assert_eq!(compound.to_css_string(), "button#submit.btn.btn-primary");
}

#[test]
fn test_names_are_escaped() {
    assert_eq!(class("1col").to_css_string(), ".\\31 col");
    assert_eq!(class("a:b").to_css_string(), ".a\\:b");
    assert_eq!(Compound::new().id("x y").unwrap().to_css_string(), "#x\\ y");
}

#[test]
fn test_empty_names_rejected() {
    assert!(Compound::element("").is_err());
    assert!(Compound::new().class("").is_err());
    assert!(Compound::new().id("").is_err());
    assert!(AttributeSelector::exists("").is_err());
}

#[test]
fn test_pseudo_element_is_last() {
    let compound = element("p")
        .pseudo_element(PseudoElement::FirstLine)
        .class("lead")
        .unwrap();
    assert_eq!(compound.to_css_string(), "p.lead::first-line");
}

// ============================================================================
// Attribute selectors
// ============================================================================

#[test]
fn test_attribute_selectors() {
    let cases = [
        (AttributeMatcher::EqualTo, "[type=\"text\"]"),
        (AttributeMatcher::WhiteSpaceSeparatedListContaining, "[type~=\"text\"]"),
        (AttributeMatcher::HyphenSeparatedListBeginningWith, "[type|=\"text\"]"),
        (AttributeMatcher::StartsWith, "[type^=\"text\"]"),
        (AttributeMatcher::EndsWith, "[type$=\"text\"]"),
        (AttributeMatcher::ContainsSubstring, "[type*=\"text\"]"),
    ];
    for (matcher, expected) in cases {
        let selector = AttributeSelector::new("type", matcher, "text").unwrap();
        assert_eq!(selector.to_css_string(), expected);
    }
}

#[test]
fn test_attribute_presence_and_modifier() {
    assert_eq!(AttributeSelector::exists("href").unwrap().to_css_string(), "[href]");
    let insensitive = AttributeSelector::equals("lang", "EN")
        .unwrap()
        .modifier(AttributeModifier::CaseInsensitive);
    assert_eq!(insensitive.to_css_string(), "[lang=\"EN\" i]");

    // presence tests have no value for the flag to apply to
    let presence = AttributeSelector::exists("href")
        .unwrap()
        .modifier(AttributeModifier::CaseSensitive);
    assert_eq!(presence.to_css_string(), "[href]");
}

#[test]
fn test_attribute_value_escaping() {
    let selector = AttributeSelector::equals("title", "say \"hi\"").unwrap();
    assert_eq!(selector.to_css_string(), "[title=\"say \\\"hi\\\"\"]");
}

// ============================================================================
// Pseudo-classes
// ============================================================================

#[test]
fn test_keyword_pseudo_classes() {
    let compound = element("a")
        .pseudo_class(PseudoClassKeyword::Hover)
        .pseudo_class(PseudoClassKeyword::FocusVisible);
    assert_eq!(compound.to_css_string(), "a:hover:focus-visible");
    assert_eq!(
        Compound::new()
            .pseudo_class(PseudoClassKeyword::PlaceholderShown)
            .to_css_string(),
        ":placeholder-shown"
    );
}

#[test]
fn test_nth() {
    assert_eq!(Nth::Odd.to_css_string(), "odd");
    assert_eq!(Nth::Even.to_css_string(), "even");
    assert_eq!(Nth::AnB(2, 1).to_css_string(), "2n+1");
    assert_eq!(Nth::AnB(3, -2).to_css_string(), "3n-2");
    assert_eq!(Nth::AnB(1, 0).to_css_string(), "n");
    assert_eq!(Nth::AnB(-1, 3).to_css_string(), "-n+3");
    assert_eq!(Nth::index(5).to_css_string(), "5");
    assert_eq!(Nth::index(-2).to_css_string(), "-2");
}

#[test]
fn test_nth_pseudo_classes() {
    let row = element("tr").pseudo_class(PseudoClass::nth_child(Nth::Even));
    assert_eq!(row.to_css_string(), "tr:nth-child(even)");

    let of = PseudoClass::NthChild(Nth::AnB(2, 0), Some(class("item").into()));
    assert_eq!(of.to_css_string(), ":nth-child(2n of .item)");

    assert_eq!(
        PseudoClass::NthLastOfType(Nth::index(1)).to_css_string(),
        ":nth-last-of-type(1)"
    );
    assert_eq!(
        PseudoClass::NthLastChild(Nth::Odd, None).to_css_string(),
        ":nth-last-child(odd)"
    );
    assert_eq!(
        PseudoClass::NthOfType(Nth::AnB(3, 1)).to_css_string(),
        ":nth-of-type(3n+1)"
    );
}

#[test]
fn test_logical_pseudo_classes() {
    let list = SelectorList::new([class("a"), class("b")]).unwrap();
    assert_eq!(PseudoClass::Not(list.clone()).to_css_string(), ":not(.a, .b)");
    assert_eq!(PseudoClass::Is(list.clone()).to_css_string(), ":is(.a, .b)");
    assert_eq!(PseudoClass::Where(list).to_css_string(), ":where(.a, .b)");
}

#[test]
fn test_has() {
    let has = PseudoClass::has([
        RelativeSelector::new(Combinator::Child, element("img")),
        RelativeSelector::from(Selector::from(class("caption"))),
    ])
    .unwrap();
    assert_eq!(
        element("figure").pseudo_class(has).to_css_string(),
        "figure:has(> img, .caption)"
    );
    assert!(PseudoClass::has([]).is_err());
}

#[test]
fn test_lang_and_dir() {
    assert_eq!(
        PseudoClass::lang(["en", "fr-CA"]).unwrap().to_css_string(),
        ":lang(en, fr-CA)"
    );
    assert!(PseudoClass::lang(Vec::<String>::new()).is_err());
    assert_eq!(PseudoClass::Dir(TextDirection::Rtl).to_css_string(), ":dir(rtl)");
}

#[test]
fn test_function_arguments_are_checked() {
    let Ok(PseudoClass::Lang(ranges)) = PseudoClass::lang(["de"]) else {
        panic!("expected :lang()");
    };
    assert_eq!(ranges.first().as_str(), "de");
    assert!(LanguageRange::new("").is_err());
    assert!(PseudoClass::lang(["en", ""]).is_err());

    let Ok(PseudoClass::Has(selectors)) = PseudoClass::has([RelativeSelector::from(Selector::from(class("x")))])
    else {
        panic!("expected :has()");
    };
    assert_eq!(selectors.len(), 1);

    let Ok(PseudoElement::Part(names)) = PseudoElement::part([CustomIdent::new("tab").unwrap()]) else {
        panic!("expected ::part()");
    };
    assert_eq!(names.len(), 1);
    assert_eq!(
        PseudoElement::part([]),
        Err(crate::Error::EmptyList("::part()"))
    );
}

// ============================================================================
// Pseudo-elements
// ============================================================================

#[test]
fn test_pseudo_elements() {
    let cases = [
        (PseudoElement::Before, "::before"),
        (PseudoElement::After, "::after"),
        (PseudoElement::FirstLetter, "::first-letter"),
        (PseudoElement::Marker, "::marker"),
        (PseudoElement::Placeholder, "::placeholder"),
        (PseudoElement::Selection, "::selection"),
        (PseudoElement::Backdrop, "::backdrop"),
        (PseudoElement::FileSelectorButton, "::file-selector-button"),
    ];
    for (pseudo, expected) in cases {
        assert_eq!(pseudo.to_css_string(), expected);
    }
}

#[test]
fn test_part() {
    let part = PseudoElement::part([
        CustomIdent::new("label").unwrap(),
        CustomIdent::new("active").unwrap(),
    ])
    .unwrap();
    assert_eq!(part.to_css_string(), "::part(label active)");
    assert!(PseudoElement::part([]).is_err());
}

// ============================================================================
// Complex selectors and lists
// ============================================================================

#[test]
fn test_combinators() {
    let selector = Selector::new(element("nav"))
        .child(element("ul"))
        .descendant(element("a"))
        .next_sibling(class("badge"))
        .subsequent_sibling(element("span"));
    assert_eq!(selector.to_css_string(), "nav > ul a + .badge ~ span");

    let column = Selector::new(element("col")).column(element("td"));
    assert_eq!(column.to_css_string(), "col || td");
}

#[test]
fn test_selector_list() {
    let list = SelectorList::new([
        Selector::new(element("h1")),
        Selector::new(element("h2")).child(class("anchor")),
    ])
    .unwrap();
    assert_eq!(list.to_css_string(), "h1, h2 > .anchor");
    assert!(SelectorList::new(Vec::<Selector>::new()).is_err());
}
