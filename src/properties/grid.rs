//! Grid templates, auto tracks, placement and auto flow.
//!
//! <https://drafts.csswg.org/css-grid-2/>

use super::{keyword_property, value_property};
use crate::error::{Error, Result};
use crate::values::{
    CustomIdent, LengthPercentage, NonNegative, Number, ToCss, push_display, write_dimension,
    write_separated,
};

// ============================================================================
// Track sizing
// ============================================================================

/// `<track-breadth>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackBreadth {
    LengthPercentage(NonNegative<LengthPercentage>),
    /// `<flex>`, written with the `fr` unit.
    Flex(NonNegative<Number>),
    MinContent,
    MaxContent,
    Auto,
}

impl TrackBreadth {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(TrackBreadth::LengthPercentage(NonNegative::length_percentage(value)?))
    }

    /// A flexible `fr` breadth, which must not be negative.
    pub fn fr(value: f32) -> Result<Self> {
        NonNegative::new(Number(value)).map(TrackBreadth::Flex)
    }
}

impl ToCss for TrackBreadth {
    fn to_css(&self, buf: &mut String) {
        match self {
            TrackBreadth::LengthPercentage(value) => value.to_css(buf),
            TrackBreadth::Flex(value) => write_dimension(buf, value.get().0, "fr"),
            TrackBreadth::MinContent => buf.push_str("min-content"),
            TrackBreadth::MaxContent => buf.push_str("max-content"),
            TrackBreadth::Auto => buf.push_str("auto"),
        }
    }
}

/// `<track-size>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackSize {
    Breadth(TrackBreadth),
    MinMax(TrackBreadth, TrackBreadth),
    FitContent(NonNegative<LengthPercentage>),
}

impl TrackSize {
    pub fn fr(value: f32) -> Result<Self> {
        Ok(TrackSize::Breadth(TrackBreadth::fr(value)?))
    }

    pub fn minmax(min: TrackBreadth, max: TrackBreadth) -> Self {
        TrackSize::MinMax(min, max)
    }
}

impl From<TrackBreadth> for TrackSize {
    fn from(breadth: TrackBreadth) -> Self {
        TrackSize::Breadth(breadth)
    }
}

impl ToCss for TrackSize {
    fn to_css(&self, buf: &mut String) {
        match self {
            TrackSize::Breadth(breadth) => breadth.to_css(buf),
            TrackSize::MinMax(min, max) => {
                buf.push_str("minmax(");
                min.to_css(buf);
                buf.push_str(", ");
                max.to_css(buf);
                buf.push(')');
            }
            TrackSize::FitContent(limit) => {
                buf.push_str("fit-content(");
                limit.to_css(buf);
                buf.push(')');
            }
        }
    }
}

/// The repetition count of `repeat()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Count(u32),
    AutoFill,
    AutoFit,
}

impl ToCss for RepeatCount {
    fn to_css(&self, buf: &mut String) {
        match self {
            RepeatCount::Count(count) => push_display(buf, count),
            RepeatCount::AutoFill => buf.push_str("auto-fill"),
            RepeatCount::AutoFit => buf.push_str("auto-fit"),
        }
    }
}

/// One entry of a track list.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackListItem {
    Track(TrackSize),
    /// `[name another-name]`
    LineNames(Vec<CustomIdent>),
    /// Built with [`TrackListItem::repeat`].
    Repeat(Repeat),
}

/// `repeat(count, tracks)`; a numeric count is at least 1 and the track
/// list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat {
    count: RepeatCount,
    tracks: Vec<TrackSize>,
}

impl Repeat {
    pub fn new(count: RepeatCount, tracks: impl IntoIterator<Item = TrackSize>) -> Result<Self> {
        if let RepeatCount::Count(n) = count
            && n < 1
        {
            return Err(Error::TooSmall {
                what: "repeat() count",
                value: n.into(),
                min: 1,
            });
        }
        let tracks: Vec<_> = tracks.into_iter().collect();
        if tracks.is_empty() {
            return Err(Error::EmptyList("repeat() tracks"));
        }
        Ok(Repeat { count, tracks })
    }

    pub fn count(&self) -> RepeatCount {
        self.count
    }

    pub fn tracks(&self) -> &[TrackSize] {
        &self.tracks
    }
}

impl ToCss for Repeat {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("repeat(");
        self.count.to_css(buf);
        buf.push_str(", ");
        write_separated(buf, &self.tracks, " ");
        buf.push(')');
    }
}

impl TrackListItem {
    pub fn repeat(count: RepeatCount, tracks: impl IntoIterator<Item = TrackSize>) -> Result<Self> {
        Repeat::new(count, tracks).map(TrackListItem::Repeat)
    }

    pub fn line_names(names: impl IntoIterator<Item = CustomIdent>) -> Self {
        TrackListItem::LineNames(names.into_iter().collect())
    }
}

impl From<TrackSize> for TrackListItem {
    fn from(track: TrackSize) -> Self {
        TrackListItem::Track(track)
    }
}

impl From<TrackBreadth> for TrackListItem {
    fn from(breadth: TrackBreadth) -> Self {
        TrackListItem::Track(breadth.into())
    }
}

impl ToCss for TrackListItem {
    fn to_css(&self, buf: &mut String) {
        match self {
            TrackListItem::Track(track) => track.to_css(buf),
            TrackListItem::LineNames(names) => {
                buf.push('[');
                write_separated(buf, names, " ");
                buf.push(']');
            }
            TrackListItem::Repeat(repeat) => repeat.to_css(buf),
        }
    }
}

/// `none | <track-list>`, the value of `grid-template-columns/rows`.
///
/// An empty list is `none`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackList(Vec<TrackListItem>);

impl TrackList {
    pub fn none() -> Self {
        TrackList::default()
    }

    pub fn new<I: Into<TrackListItem>>(items: impl IntoIterator<Item = I>) -> Self {
        TrackList(items.into_iter().map(Into::into).collect())
    }

    pub fn items(&self) -> &[TrackListItem] {
        &self.0
    }
}

impl ToCss for TrackList {
    fn to_css(&self, buf: &mut String) {
        if self.0.is_empty() {
            buf.push_str("none");
        } else {
            write_separated(buf, &self.0, " ");
        }
    }
}

// ============================================================================
// Placement
// ============================================================================

/// A grid line number; never zero. Negative numbers count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineIndex(i32);

impl LineIndex {
    pub fn new(index: i32) -> Result<Self> {
        if index == 0 {
            return Err(Error::ZeroLine);
        }
        Ok(LineIndex(index))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// The count of a `span` grid line; at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanCount(u32);

impl SpanCount {
    pub fn new(count: u32) -> Result<Self> {
        if count < 1 {
            return Err(Error::TooSmall {
                what: "span count",
                value: count.into(),
                min: 1,
            });
        }
        Ok(SpanCount(count))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// `<grid-line>`
#[derive(Debug, Clone, PartialEq)]
pub enum GridLine {
    Auto,
    Line(LineIndex),
    Named(CustomIdent),
    Span(SpanCount),
}

impl GridLine {
    pub fn line(index: i32) -> Result<Self> {
        LineIndex::new(index).map(GridLine::Line)
    }

    pub fn span(count: u32) -> Result<Self> {
        SpanCount::new(count).map(GridLine::Span)
    }
}

impl ToCss for GridLine {
    fn to_css(&self, buf: &mut String) {
        match self {
            GridLine::Auto => buf.push_str("auto"),
            GridLine::Line(index) => push_display(buf, index.get()),
            GridLine::Named(name) => name.to_css(buf),
            GridLine::Span(count) => {
                buf.push_str("span ");
                push_display(buf, count.get());
            }
        }
    }
}

value_property! {
    /// `grid-template-columns`
    pub GridTemplateColumns: "grid-template-columns" => TrackList;
    /// `grid-template-rows`
    pub GridTemplateRows: "grid-template-rows" => TrackList;
    /// `grid-auto-columns`
    pub GridAutoColumns: "grid-auto-columns" => TrackSize;
    /// `grid-auto-rows`
    pub GridAutoRows: "grid-auto-rows" => TrackSize;

    pub GridColumnStart: "grid-column-start" => GridLine;
    pub GridColumnEnd: "grid-column-end" => GridLine;
    pub GridRowStart: "grid-row-start" => GridLine;
    pub GridRowEnd: "grid-row-end" => GridLine;
}

keyword_property! {
    /// `grid-auto-flow`
    pub enum GridAutoFlow: "grid-auto-flow" {
        Row => "row",
        Column => "column",
        Dense => "dense",
        RowDense => "row dense",
        ColumnDense => "column dense",
    }
}

impl GridTemplateColumns {
    /// `repeat(count, 1fr)`
    pub fn equal(count: u32) -> Result<Self> {
        let item = TrackListItem::repeat(RepeatCount::Count(count), [TrackSize::fr(1.0)?])?;
        Ok(GridTemplateColumns::Value(TrackList::new([item])))
    }
}
