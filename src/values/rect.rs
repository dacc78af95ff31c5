//! Four-sided values (`margin`, `padding`, `border-color`, ...).

use super::ToCss;

/// A value per box side, in `top right bottom left` order.
///
/// Serializes to the shortest equivalent 1–4 value form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Rect<T> {
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Rect {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Map every side through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Rect<U> {
        Rect {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

impl<T: Clone> Rect<T> {
    /// The same value on all four sides.
    pub fn all(value: T) -> Self {
        Rect::new(value.clone(), value.clone(), value.clone(), value)
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Rect::new(vertical.clone(), horizontal.clone(), vertical, horizontal)
    }
}

impl<T: ToCss + PartialEq> ToCss for Rect<T> {
    fn to_css(&self, buf: &mut String) {
        self.top.to_css(buf);
        let same_vertical = self.top == self.bottom;
        let same_horizontal = self.left == self.right;
        if same_vertical && same_horizontal && self.top == self.right {
            return;
        }

        buf.push(' ');
        self.right.to_css(buf);
        if same_vertical && same_horizontal {
            return;
        }

        buf.push(' ');
        self.bottom.to_css(buf);
        if same_horizontal {
            return;
        }

        buf.push(' ');
        self.left.to_css(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Length;

    fn px(v: f32) -> Length {
        Length::px(v)
    }

    #[test]
    fn test_rect_shortest_form() {
        assert_eq!(Rect::all(px(1.0)).to_css_string(), "1px");
        assert_eq!(Rect::symmetric(px(10.0), px(5.0)).to_css_string(), "10px 5px");
        assert_eq!(
            Rect::new(px(1.0), px(2.0), px(3.0), px(2.0)).to_css_string(),
            "1px 2px 3px"
        );
        assert_eq!(
            Rect::new(px(1.0), px(2.0), px(3.0), px(4.0)).to_css_string(),
            "1px 2px 3px 4px"
        );
    }

    #[test]
    fn test_rect_keeps_distinct_left() {
        // top == bottom but left != right needs all four values
        assert_eq!(
            Rect::new(px(1.0), px(2.0), px(1.0), px(4.0)).to_css_string(),
            "1px 2px 1px 4px"
        );
    }
}
