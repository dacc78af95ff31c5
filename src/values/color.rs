//! The `<color>` type.
//!
//! Channel ranges follow the clamping policy: alpha is clamped into `[0, 1]`
//! and color-function percentages into `[0%, 100%]` at construction, the way
//! CSS clamps out-of-range color components. RGB channels are `u8`, so they
//! cannot leave `[0, 255]`.

use super::{Percentage, ToCss, clamp_finite, enum_property, push_display, write_number};
use crate::error::{Error, Result};

/// An alpha value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha(f32);

impl Alpha {
    pub const OPAQUE: Alpha = Alpha(1.0);
    pub const TRANSPARENT: Alpha = Alpha(0.0);

    /// Create an alpha value, clamping into `[0, 1]`.
    pub fn new(value: f32) -> Self {
        Alpha(clamp_finite("alpha", value, 0.0, 1.0, 0.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl From<f32> for Alpha {
    fn from(value: f32) -> Self {
        Alpha::new(value)
    }
}

impl ToCss for Alpha {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.0);
    }
}

enum_property! {
    /// The CSS named colors.
    ///
    /// <https://drafts.csswg.org/css-color-4/#named-colors>
    pub enum NamedColor {
        AliceBlue => "aliceblue",
        AntiqueWhite => "antiquewhite",
        Aqua => "aqua",
        AquaMarine => "aquamarine",
        Azure => "azure",
        Beige => "beige",
        Bisque => "bisque",
        Black => "black",
        BlanchedAlmond => "blanchedalmond",
        Blue => "blue",
        BlueViolet => "blueviolet",
        Brown => "brown",
        BurlyWood => "burlywood",
        CadetBlue => "cadetblue",
        Chartreuse => "chartreuse",
        Chocolate => "chocolate",
        Coral => "coral",
        CornflowerBlue => "cornflowerblue",
        Cornsilk => "cornsilk",
        Crimson => "crimson",
        Cyan => "cyan",
        DarkBlue => "darkblue",
        DarkCyan => "darkcyan",
        DarkGoldenrod => "darkgoldenrod",
        DarkGray => "darkgray",
        DarkGreen => "darkgreen",
        DarkGrey => "darkgrey",
        DarkKhaki => "darkkhaki",
        DarkMagenta => "darkmagenta",
        DarkOliveGreen => "darkolivegreen",
        DarkOrange => "darkorange",
        DarkOrchid => "darkorchid",
        DarkRed => "darkred",
        DarkSalmon => "darksalmon",
        DarkSeaGreen => "darkseagreen",
        DarkSlateBlue => "darkslateblue",
        DarkSlateGray => "darkslategray",
        DarkSlateGrey => "darkslategrey",
        DarkTurquoise => "darkturquoise",
        DarkViolet => "darkviolet",
        DeepPink => "deeppink",
        DeepSkyBlue => "deepskyblue",
        DimGray => "dimgray",
        DimGrey => "dimgrey",
        DodgerBlue => "dodgerblue",
        FireBrick => "firebrick",
        FloralWhite => "floralwhite",
        ForestGreen => "forestgreen",
        Fuchsia => "fuchsia",
        Gainsboro => "gainsboro",
        GhostWhite => "ghostwhite",
        Gold => "gold",
        Goldenrod => "goldenrod",
        Gray => "gray",
        Green => "green",
        GreenYellow => "greenyellow",
        Grey => "grey",
        Honeydew => "honeydew",
        HotPink => "hotpink",
        IndianRed => "indianred",
        Indigo => "indigo",
        Ivory => "ivory",
        Khaki => "khaki",
        Lavender => "lavender",
        LavenderBlush => "lavenderblush",
        LawnGreen => "lawngreen",
        LemonChiffon => "lemonchiffon",
        LightBlue => "lightblue",
        LightCoral => "lightcoral",
        LightCyan => "lightcyan",
        LightGoldenrodYellow => "lightgoldenrodyellow",
        LightGray => "lightgray",
        LightGreen => "lightgreen",
        LightGrey => "lightgrey",
        LightPink => "lightpink",
        LightSalmon => "lightsalmon",
        LightSeaGreen => "lightseagreen",
        LightSkyBlue => "lightskyblue",
        LightSlateGray => "lightslategray",
        LightSlateGrey => "lightslategrey",
        LightSteelBlue => "lightsteelblue",
        LightYellow => "lightyellow",
        Lime => "lime",
        LimeGreen => "limegreen",
        Linen => "linen",
        Magenta => "magenta",
        Maroon => "maroon",
        MediumAquaMarine => "mediumaquamarine",
        MediumBlue => "mediumblue",
        MediumOrchid => "mediumorchid",
        MediumPurple => "mediumpurple",
        MediumSeaGreen => "mediumseagreen",
        MediumSlateBlue => "mediumslateblue",
        MediumSpringGreen => "mediumspringgreen",
        MediumTurquoise => "mediumturquoise",
        MediumVioletRed => "mediumvioletred",
        MidnightBlue => "midnightblue",
        MintCream => "mintcream",
        MistyRose => "mistyrose",
        Moccasin => "moccasin",
        NavajoWhite => "navajowhite",
        Navy => "navy",
        OldLace => "oldlace",
        Olive => "olive",
        OliveDrab => "olivedrab",
        Orange => "orange",
        OrangeRed => "orangered",
        Orchid => "orchid",
        PaleGoldenrod => "palegoldenrod",
        PaleGreen => "palegreen",
        PaleTurquoise => "paleturquoise",
        PaleVioletRed => "palevioletred",
        PapayaWhip => "papayawhip",
        PeachPuff => "peachpuff",
        Peru => "peru",
        Pink => "pink",
        Plum => "plum",
        PowderBlue => "powderblue",
        Purple => "purple",
        RebeccaPurple => "rebeccapurple",
        Red => "red",
        RosyBrown => "rosybrown",
        RoyalBlue => "royalblue",
        SaddleBrown => "saddlebrown",
        Salmon => "salmon",
        SandyBrown => "sandybrown",
        SeaGreen => "seagreen",
        SeaShell => "seashell",
        Sienna => "sienna",
        Silver => "silver",
        SkyBlue => "skyblue",
        SlateBlue => "slateblue",
        SlateGray => "slategray",
        SlateGrey => "slategrey",
        Snow => "snow",
        SpringGreen => "springgreen",
        SteelBlue => "steelblue",
        Tan => "tan",
        Teal => "teal",
        Thistle => "thistle",
        Tomato => "tomato",
        Turquoise => "turquoise",
        Violet => "violet",
        Wheat => "wheat",
        White => "white",
        WhiteSmoke => "whitesmoke",
        Yellow => "yellow",
        YellowGreen => "yellowgreen",
    }
}

enum_property! {
    /// System colors.
    ///
    /// <https://drafts.csswg.org/css-color-4/#css-system-colors>
    pub enum SystemColor {
        AccentColor => "accentcolor",
        AccentColorText => "accentcolortext",
        ActiveText => "activetext",
        ButtonBorder => "buttonborder",
        ButtonFace => "buttonface",
        ButtonText => "buttontext",
        Canvas => "canvas",
        CanvasText => "canvastext",
        Field => "field",
        FieldText => "fieldtext",
        GrayText => "graytext",
        Highlight => "highlight",
        HighlightText => "highlighttext",
        LinkText => "linktext",
        Mark => "mark",
        MarkText => "marktext",
        SelectedItem => "selecteditem",
        SelectedItemText => "selecteditemtext",
        VisitedText => "visitedtext",
    }
}

/// A `<color>` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// `currentcolor`
    CurrentColor,
    /// `transparent`
    Transparent,
    Named(NamedColor),
    System(SystemColor),
    /// Hex notation; serialized in its shortest form.
    Hex { r: u8, g: u8, b: u8, a: Option<u8> },
    /// `rgb(r, g, b)`
    Rgb(u8, u8, u8),
    /// `rgba(r, g, b, a)`
    Rgba(u8, u8, u8, Alpha),
    /// `hsl()`/`hsla()`, built with [`Color::hsl`] or [`Color::hsla`].
    Hsl(Hsl),
    /// `hwb()`, built with [`Color::hwb`].
    Hwb(Hwb),
}

/// The channels of an `hsl()` color. Percentages lie in `[0%, 100%]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    hue: f32,
    saturation: Percentage,
    lightness: Percentage,
    alpha: Option<Alpha>,
}

impl Hsl {
    /// Hue in degrees.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> Percentage {
        self.saturation
    }

    pub fn lightness(&self) -> Percentage {
        self.lightness
    }

    pub fn alpha(&self) -> Option<Alpha> {
        self.alpha
    }
}

impl ToCss for Hsl {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(if self.alpha.is_some() { "hsla(" } else { "hsl(" });
        write_number(buf, self.hue);
        buf.push_str(", ");
        self.saturation.to_css(buf);
        buf.push_str(", ");
        self.lightness.to_css(buf);
        if let Some(alpha) = self.alpha {
            buf.push_str(", ");
            alpha.to_css(buf);
        }
        buf.push(')');
    }
}

/// The channels of an `hwb()` color. Percentages lie in `[0%, 100%]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    hue: f32,
    whiteness: Percentage,
    blackness: Percentage,
    alpha: Option<Alpha>,
}

impl Hwb {
    /// Hue in degrees.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn whiteness(&self) -> Percentage {
        self.whiteness
    }

    pub fn blackness(&self) -> Percentage {
        self.blackness
    }

    pub fn alpha(&self) -> Option<Alpha> {
        self.alpha
    }
}

impl ToCss for Hwb {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("hwb(");
        write_number(buf, self.hue);
        buf.push(' ');
        self.whiteness.to_css(buf);
        buf.push(' ');
        self.blackness.to_css(buf);
        if let Some(alpha) = self.alpha {
            buf.push_str(" / ");
            alpha.to_css(buf);
        }
        buf.push(')');
    }
}

fn channel(value: f32) -> Percentage {
    Percentage::new(value).clamped(0.0, 100.0)
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);
    pub const TRANSPARENT: Color = Color::Transparent;

    /// Create a new opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new color with alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba(r, g, b, Alpha::new(a))
    }

    pub fn named(color: NamedColor) -> Self {
        Color::Named(color)
    }

    /// Parse hex notation: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional.
    pub fn hex(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let invalid = || Error::InvalidHexColor(text.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        let (r, g, b, a) = match digits.len() {
            3 => (nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, None),
            4 => (
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
                Some(nibble(3)? * 17),
            ),
            6 => (byte(0)?, byte(2)?, byte(4)?, None),
            8 => (byte(0)?, byte(2)?, byte(4)?, Some(byte(6)?)),
            _ => return Err(invalid()),
        };
        Ok(Color::Hex { r, g, b, a })
    }

    /// `hsl(hue, saturation%, lightness%)`, percentages clamped into `[0, 100]`.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Color::Hsl(Hsl {
            hue,
            saturation: channel(saturation),
            lightness: channel(lightness),
            alpha: None,
        })
    }

    /// `hsla(hue, saturation%, lightness%, alpha)`.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Color::Hsl(Hsl {
            hue,
            saturation: channel(saturation),
            lightness: channel(lightness),
            alpha: Some(Alpha::new(alpha)),
        })
    }

    /// `hwb(hue whiteness% blackness%)`, percentages clamped into `[0, 100]`.
    pub fn hwb(hue: f32, whiteness: f32, blackness: f32, alpha: Option<f32>) -> Self {
        Color::Hwb(Hwb {
            hue,
            whiteness: channel(whiteness),
            blackness: channel(blackness),
            alpha: alpha.map(Alpha::new),
        })
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl From<SystemColor> for Color {
    fn from(color: SystemColor) -> Self {
        Color::System(color)
    }
}

fn write_hex(buf: &mut String, channels: &[u8]) {
    // #rrggbb collapses to #rgb when every channel repeats its nibble
    let short = channels.iter().all(|c| c >> 4 == c & 0xf);
    buf.push('#');
    for channel in channels {
        if short {
            push_display(buf, format_args!("{:x}", channel & 0xf));
        } else {
            push_display(buf, format_args!("{:02x}", channel));
        }
    }
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        match self {
            Color::CurrentColor => buf.push_str("currentcolor"),
            Color::Transparent => buf.push_str("transparent"),
            Color::Named(named) => named.to_css(buf),
            Color::System(system) => system.to_css(buf),
            Color::Hex { r, g, b, a: None } => write_hex(buf, &[*r, *g, *b]),
            Color::Hex {
                r,
                g,
                b,
                a: Some(a),
            } => write_hex(buf, &[*r, *g, *b, *a]),
            Color::Rgb(r, g, b) => push_display(buf, format_args!("rgb({r}, {g}, {b})")),
            Color::Rgba(r, g, b, a) => {
                push_display(buf, format_args!("rgba({r}, {g}, {b}, "));
                a.to_css(buf);
                buf.push(')');
            }
            Color::Hsl(hsl) => hsl.to_css(buf),
            Color::Hwb(hwb) => hwb.to_css(buf),
        }
    }
}
