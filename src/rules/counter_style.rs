//! `@counter-style`.
//!
//! <https://drafts.csswg.org/css-counter-styles-3/>

use super::descriptor::DescriptorBlock;
use crate::error::{Error, Result};
use crate::values::{
    CssString, CustomIdent, Image, NonEmpty, ToCss, enum_property, push_display,
    write_comma_separated, write_separated,
};

/// Value of the `system` descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterSystem {
    Cyclic,
    Numeric,
    Alphabetic,
    Symbolic,
    Additive,
    /// `fixed <integer>?`
    Fixed(Option<i32>),
    /// `extends <counter-style-name>`
    Extends(CustomIdent),
}

impl ToCss for CounterSystem {
    fn to_css(&self, buf: &mut String) {
        match self {
            CounterSystem::Cyclic => buf.push_str("cyclic"),
            CounterSystem::Numeric => buf.push_str("numeric"),
            CounterSystem::Alphabetic => buf.push_str("alphabetic"),
            CounterSystem::Symbolic => buf.push_str("symbolic"),
            CounterSystem::Additive => buf.push_str("additive"),
            CounterSystem::Fixed(first) => {
                buf.push_str("fixed");
                if let Some(first) = first {
                    buf.push(' ');
                    push_display(buf, first);
                }
            }
            CounterSystem::Extends(name) => {
                buf.push_str("extends ");
                name.to_css(buf);
            }
        }
    }
}

/// A `<symbol>`: a string, an identifier or an image.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    String(CssString),
    Ident(CustomIdent),
    Image(Image),
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        Symbol::String(CssString::new(symbol))
    }
}

impl From<CustomIdent> for Symbol {
    fn from(ident: CustomIdent) -> Self {
        Symbol::Ident(ident)
    }
}

impl From<Image> for Symbol {
    fn from(image: Image) -> Self {
        Symbol::Image(image)
    }
}

impl ToCss for Symbol {
    fn to_css(&self, buf: &mut String) {
        match self {
            Symbol::String(string) => string.to_css(buf),
            Symbol::Ident(ident) => ident.to_css(buf),
            Symbol::Image(image) => image.to_css(buf),
        }
    }
}

/// An `<integer [0,∞]> && <symbol>` pair, used by `additive-symbols` and `pad`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveTuple {
    weight: u32,
    symbol: Symbol,
}

impl AdditiveTuple {
    pub fn new(weight: u32, symbol: impl Into<Symbol>) -> Self {
        AdditiveTuple {
            weight,
            symbol: symbol.into(),
        }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

impl ToCss for AdditiveTuple {
    fn to_css(&self, buf: &mut String) {
        push_display(buf, self.weight);
        buf.push(' ');
        self.symbol.to_css(buf);
    }
}

/// Value of `additive-symbols`, written in the given order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveSymbols(NonEmpty<AdditiveTuple>);

impl AdditiveSymbols {
    /// Fails when `tuples` is empty.
    pub fn new<S: Into<Symbol>>(tuples: impl IntoIterator<Item = (u32, S)>) -> Result<Self> {
        let tuples = tuples
            .into_iter()
            .map(|(weight, symbol)| AdditiveTuple::new(weight, symbol));
        NonEmpty::new("additive-symbols", tuples).map(AdditiveSymbols)
    }

    pub fn tuples(&self) -> &[AdditiveTuple] {
        &self.0
    }
}

impl ToCss for AdditiveSymbols {
    fn to_css(&self, buf: &mut String) {
        write_comma_separated(buf, &self.0);
    }
}

/// A space-separated symbol list.
struct Symbols<'a>(&'a [Symbol]);

impl ToCss for Symbols<'_> {
    fn to_css(&self, buf: &mut String) {
        write_separated(buf, self.0, " ");
    }
}

/// One bound of a `range` descriptor entry; `None` is `infinite`.
struct Bound(Option<i32>);

impl ToCss for Bound {
    fn to_css(&self, buf: &mut String) {
        match self.0 {
            Some(value) => push_display(buf, value),
            None => buf.push_str("infinite"),
        }
    }
}

/// Value of the `range` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CounterRange {
    Auto,
    /// `[ <integer> | infinite ]{2}#`, built with [`CounterRange::bounds`].
    Bounds(NonEmpty<(Option<i32>, Option<i32>)>),
}

impl CounterRange {
    /// Bounded ranges; `None` stands for `infinite`.
    ///
    /// Fails when `ranges` is empty.
    pub fn bounds(ranges: impl IntoIterator<Item = (Option<i32>, Option<i32>)>) -> Result<Self> {
        NonEmpty::new("range", ranges).map(CounterRange::Bounds)
    }
}

impl ToCss for CounterRange {
    fn to_css(&self, buf: &mut String) {
        let CounterRange::Bounds(ranges) = self else {
            buf.push_str("auto");
            return;
        };
        for (i, (lower, upper)) in ranges.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            Bound(*lower).to_css(buf);
            buf.push(' ');
            Bound(*upper).to_css(buf);
        }
    }
}

enum_property! {
    pub enum SpeakAsKeyword {
        Auto => "auto",
        Bullets => "bullets",
        Numbers => "numbers",
        Words => "words",
        SpellOut => "spell-out",
    }
}

/// Value of the `speak-as` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpeakAs {
    Keyword(SpeakAsKeyword),
    CounterStyle(CustomIdent),
}

impl ToCss for SpeakAs {
    fn to_css(&self, buf: &mut String) {
        match self {
            SpeakAs::Keyword(keyword) => keyword.to_css(buf),
            SpeakAs::CounterStyle(name) => name.to_css(buf),
        }
    }
}

/// `@counter-style <name> { descriptors }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterStyleRule {
    name: CustomIdent,
    descriptors: DescriptorBlock,
}

impl CounterStyleRule {
    /// Fails for `none`, which cannot name a counter style.
    pub fn new(name: CustomIdent) -> Result<Self> {
        if name.as_str().eq_ignore_ascii_case("none") {
            return Err(Error::ReservedIdent(name.as_str().to_owned()));
        }
        Ok(CounterStyleRule {
            name,
            descriptors: DescriptorBlock::new(),
        })
    }

    fn with(mut self, name: &'static str, value: &dyn ToCss) -> Self {
        self.descriptors.set(name, value);
        self
    }

    pub fn system(self, system: CounterSystem) -> Self {
        self.with("system", &system)
    }

    /// Fails when `symbols` is empty.
    pub fn symbols<S: Into<Symbol>>(self, symbols: impl IntoIterator<Item = S>) -> Result<Self> {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(Error::EmptyList("symbols"));
        }
        Ok(self.with("symbols", &Symbols(&symbols)))
    }

    /// Weighted symbols for the additive system, written in the given order.
    ///
    /// Fails when `tuples` is empty.
    pub fn additive_symbols<S: Into<Symbol>>(self, tuples: impl IntoIterator<Item = (u32, S)>) -> Result<Self> {
        let symbols = AdditiveSymbols::new(tuples)?;
        Ok(self.with("additive-symbols", &symbols))
    }

    /// `negative: <symbol> <symbol>?`
    pub fn negative(self, prefix: impl Into<Symbol>, suffix: Option<Symbol>) -> Self {
        let mut symbols = vec![prefix.into()];
        symbols.extend(suffix);
        self.with("negative", &Symbols(&symbols))
    }

    pub fn prefix(self, prefix: impl Into<Symbol>) -> Self {
        self.with("prefix", &prefix.into())
    }

    pub fn suffix(self, suffix: impl Into<Symbol>) -> Self {
        self.with("suffix", &suffix.into())
    }

    /// `range: auto`
    pub fn range_auto(self) -> Self {
        self.with("range", &CounterRange::Auto)
    }

    /// Bounded ranges; `None` stands for `infinite`.
    ///
    /// Fails when `ranges` is empty.
    pub fn range(self, ranges: impl IntoIterator<Item = (Option<i32>, Option<i32>)>) -> Result<Self> {
        let range = CounterRange::bounds(ranges)?;
        Ok(self.with("range", &range))
    }

    /// `pad: <integer [0,∞]> <symbol>`
    pub fn pad(self, length: u32, symbol: impl Into<Symbol>) -> Self {
        self.with("pad", &AdditiveTuple::new(length, symbol))
    }

    pub fn fallback(self, name: CustomIdent) -> Self {
        self.with("fallback", &name)
    }

    pub fn speak_as(self, speak_as: SpeakAs) -> Self {
        self.with("speak-as", &speak_as)
    }

    pub fn name(&self) -> &CustomIdent {
        &self.name
    }

    pub fn descriptors(&self) -> &DescriptorBlock {
        &self.descriptors
    }
}

impl ToCss for CounterStyleRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@counter-style ");
        self.name.to_css(buf);
        buf.push(' ');
        self.descriptors.to_css(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> CustomIdent {
        CustomIdent::new(name).unwrap()
    }

    #[test]
    fn test_cyclic() {
        let rule = CounterStyleRule::new(ident("thumbs"))
            .unwrap()
            .system(CounterSystem::Cyclic)
            .symbols(["👍"])
            .unwrap()
            .suffix(" ");
        assert_eq!(
            rule.to_css_string(),
            "@counter-style thumbs { system:cyclic; symbols:\"👍\"; suffix:\" \"; }"
        );
    }

    #[test]
    fn test_additive_roman() {
        let rule = CounterStyleRule::new(ident("roman-lite"))
            .unwrap()
            .system(CounterSystem::Additive)
            .range([(Some(1), Some(3999))])
            .unwrap()
            .additive_symbols([(1000, "M"), (500, "D"), (100, "C"), (1, "I")])
            .unwrap();
        assert_eq!(
            rule.to_css_string(),
            "@counter-style roman-lite { system:additive; range:1 3999; \
             additive-symbols:1000 \"M\", 500 \"D\", 100 \"C\", 1 \"I\"; }"
        );
    }

    #[test]
    fn test_extends_and_misc_descriptors() {
        let rule = CounterStyleRule::new(ident("decimal-paren"))
            .unwrap()
            .system(CounterSystem::Extends(ident("decimal")))
            .suffix(") ")
            .negative("(", Some(Symbol::from(")")))
            .pad(2, "0")
            .range([(None, Some(-1)), (Some(1), None)])
            .unwrap()
            .fallback(ident("disc"))
            .speak_as(SpeakAs::Keyword(SpeakAsKeyword::Numbers));
        assert_eq!(
            rule.to_css_string(),
            "@counter-style decimal-paren { system:extends decimal; suffix:\") \"; \
             negative:\"(\" \")\"; pad:2 \"0\"; range:infinite -1, 1 infinite; \
             fallback:disc; speak-as:numbers; }"
        );
    }

    #[test]
    fn test_fixed_system_and_range_replacement() {
        let rule = CounterStyleRule::new(ident("dice"))
            .unwrap()
            .system(CounterSystem::Fixed(Some(1)))
            .range([(Some(1), Some(6))])
            .unwrap()
            .range_auto();
        assert_eq!(
            rule.to_css_string(),
            "@counter-style dice { system:fixed 1; range:auto; }"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(CounterStyleRule::new(ident("none")).is_err());
        let rule = CounterStyleRule::new(ident("x")).unwrap();
        assert!(rule.clone().symbols(Vec::<Symbol>::new()).is_err());
        assert!(rule.clone().range([]).is_err());
        assert!(rule.additive_symbols(Vec::<(u32, Symbol)>::new()).is_err());
    }

    #[test]
    fn test_typed_descriptor_values() {
        let symbols = AdditiveSymbols::new([(10, "X"), (5, "V")]).unwrap();
        assert_eq!(symbols.tuples()[1].weight(), 5);
        assert_eq!(symbols.tuples()[1].symbol(), &Symbol::from("V"));
        assert_eq!(symbols.to_css_string(), "10 \"X\", 5 \"V\"");
        assert_eq!(
            AdditiveSymbols::new(Vec::<(u32, Symbol)>::new()),
            Err(Error::EmptyList("additive-symbols"))
        );

        assert_eq!(CounterRange::Auto.to_css_string(), "auto");
        let range = CounterRange::bounds([(Some(-5), None)]).unwrap();
        assert_eq!(range.to_css_string(), "-5 infinite");
        assert_eq!(CounterRange::bounds([]), Err(Error::EmptyList("range")));
    }
}
