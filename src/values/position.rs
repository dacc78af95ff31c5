//! The `<position>` type used by `background-position` and `object-position`.

use super::{LengthPercentage, ToCss, enum_property};

enum_property! {
    /// Horizontal position keyword.
    pub enum HorizontalKeyword {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

enum_property! {
    /// Vertical position keyword.
    pub enum VerticalKeyword {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

enum_property! {
    /// Edge a horizontal offset is measured from.
    pub enum HorizontalSide {
        Left => "left",
        Right => "right",
    }
}

enum_property! {
    /// Edge a vertical offset is measured from.
    pub enum VerticalSide {
        Top => "top",
        Bottom => "bottom",
    }
}

/// A `<position>`.
///
/// <https://drafts.csswg.org/css-values-4/#position>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// `left top`, `center bottom`, ...
    Keywords(HorizontalKeyword, VerticalKeyword),
    /// `10px 20%`
    Values(LengthPercentage, LengthPercentage),
    /// `right 10px bottom 20px`
    Offsets {
        x: (HorizontalSide, LengthPercentage),
        y: (VerticalSide, LengthPercentage),
    },
}

impl Position {
    pub fn center() -> Self {
        Position::Keywords(HorizontalKeyword::Center, VerticalKeyword::Center)
    }

    pub fn values(x: impl Into<LengthPercentage>, y: impl Into<LengthPercentage>) -> Self {
        Position::Values(x.into(), y.into())
    }

    pub fn offsets(
        x_side: HorizontalSide,
        x: impl Into<LengthPercentage>,
        y_side: VerticalSide,
        y: impl Into<LengthPercentage>,
    ) -> Self {
        Position::Offsets {
            x: (x_side, x.into()),
            y: (y_side, y.into()),
        }
    }
}

impl ToCss for Position {
    fn to_css(&self, buf: &mut String) {
        match self {
            Position::Keywords(x, y) => {
                x.to_css(buf);
                buf.push(' ');
                y.to_css(buf);
            }
            Position::Values(x, y) => {
                x.to_css(buf);
                buf.push(' ');
                y.to_css(buf);
            }
            Position::Offsets {
                x: (x_side, x),
                y: (y_side, y),
            } => {
                x_side.to_css(buf);
                buf.push(' ');
                x.to_css(buf);
                buf.push(' ');
                y_side.to_css(buf);
                buf.push(' ');
                y.to_css(buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Length, Percentage};

    #[test]
    fn test_position_forms() {
        assert_eq!(Position::center().to_css_string(), "center center");
        assert_eq!(
            Position::Keywords(HorizontalKeyword::Left, VerticalKeyword::Bottom).to_css_string(),
            "left bottom"
        );
        assert_eq!(
            Position::values(Length::px(10.0), Percentage::new(20.0)).to_css_string(),
            "10px 20%"
        );
        assert_eq!(
            Position::offsets(
                HorizontalSide::Right,
                Length::px(10.0),
                VerticalSide::Bottom,
                Length::em(2.0)
            )
            .to_css_string(),
            "right 10px bottom 2em"
        );
    }
}
