use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CascadeError, CascadeResult};

/// Linear interpolation between two values at `t` in `[0, 1]`.
pub trait Lerp: Sized {
    /// Interpolate from `a` (`t = 0`) to `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// 8-bit sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string. Deserializes from a hex string, a CSS
/// color name (see [`Rgb8::named`]) or a `[r, g, b]` byte array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure red, the default gradient start.
    pub const RED: Self = Self::new(0xff, 0x00, 0x00);
    /// CSS purple, the default gradient end.
    pub const PURPLE: Self = Self::new(0x80, 0x00, 0x80);
    /// White, used to draw blank cells.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Black, used for cell outlines.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a CSS color name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.trim().to_ascii_lowercase().as_str() {
            "red" => Self::RED,
            "purple" => Self::PURPLE,
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "blue" => Self::new(0x00, 0x00, 0xff),
            "green" => Self::new(0x00, 0x80, 0x00),
            "yellow" => Self::new(0xff, 0xff, 0x00),
            "orange" => Self::new(0xff, 0xa5, 0x00),
            "cyan" => Self::new(0x00, 0xff, 0xff),
            "magenta" => Self::new(0xff, 0x00, 0xff),
            "gray" | "grey" => Self::new(0x80, 0x80, 0x80),
            _ => return None,
        };
        Some(c)
    }

    /// Straight RGBA8 pixel with full opacity.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Convert to hue/saturation/lightness.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if max == r {
            (g - b) / d
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = h / 6.0;
        let h = if h < 0.0 { h + 1.0 } else { h };

        Hsl { h, s, l }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = CascadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = Self::named(s) {
            return Ok(c);
        }
        parse_hex(s)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse::<Self>().map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

fn parse_hex(s: &str) -> CascadeResult<Rgb8> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> CascadeResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| CascadeError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(CascadeError::validation(format!(
            "unknown color \"{s}\": expected #RRGGBB or a color name"
        )));
    }

    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}

/// Hue, saturation and lightness, each normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Convert back to 8-bit sRGB (rounded per channel).
    pub fn to_rgb8(self) -> Rgb8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Rgb8::new(to_u8(l), to_u8(l), to_u8(l));
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Rgb8::new(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

// Hue is interpolated linearly, not along the shortest arc.
impl Lerp for Hsl {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            h: <f64 as Lerp>::lerp(&a.h, &b.h, t),
            s: <f64 as Lerp>::lerp(&a.s, &b.s, t),
            l: <f64 as Lerp>::lerp(&a.l, &b.l, t),
        }
    }
}

/// One cell of a track: a color, or blank where a sample fell on a boundary.
///
/// Serializes as the color's hex string, or `null` for [`Cell::Blank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A defined color.
    Color(Rgb8),
    /// Undefined cell. Never equal to any color, white included.
    Blank,
}

impl Cell {
    /// The color of this cell, if any.
    pub fn color(self) -> Option<Rgb8> {
        match self {
            Self::Color(c) => Some(c),
            Self::Blank => None,
        }
    }

    /// `true` for [`Cell::Blank`].
    pub fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Color used when drawing this cell; blanks are drawn white.
    pub fn display_color(self) -> Rgb8 {
        self.color().unwrap_or(Rgb8::WHITE)
    }
}

impl From<Rgb8> for Cell {
    fn from(c: Rgb8) -> Self {
        Self::Color(c)
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.color().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<Rgb8>::deserialize(deserializer)?.map_or(Self::Blank, Self::Color))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
