//! Color model value types.
//!
//! [`Rgb`] is the canonical interchange format; every other model converts
//! through it. Conversions never mutate, they return a new value. The
//! arithmetic lives in [`crate::convert`]; the methods here are the
//! value-shaped counterparts of its positional functions.

use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::ColorError;

/// 8-bit sRGB color. Channels are in 0–255 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/lightness.
///
/// `h` is in degrees 0–360 (exclusive); `s` and `l` are percentages 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue/saturation/value.
///
/// All three components are on a 0–100 scale. The hue is a percentage of a
/// full turn, so degrees = `h * 3.6` (see [`Hsv::hue_degrees`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Uncalibrated process colors, each a percentage 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Hue/whiteness/blackness.
///
/// `h` is in degrees. Chromatic colors have a hue in `(0, 360]` (pure red is
/// 360); a hue of exactly 0 marks an achromatic color. `w` and `b` are
/// percentages 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hwb {
    pub h: f64,
    pub w: f64,
    pub b: f64,
}

fn check(component: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ColorError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::component(component, value, min, max))
    }
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, rejecting anything outside 0–255.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let channel = |name: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
            })
        };
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Parse a hex string (with or without `#`, 3 or 6 digits).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16).map_err(|_| invalid())
        };
        match stripped.len() {
            3 => Ok(Self {
                r: digit(0..1)? * 17,
                g: digit(1..2)? * 17,
                b: digit(2..3)? * 17,
            }),
            6 => Ok(Self {
                r: digit(0..2)?,
                g: digit(2..4)?,
                b: digit(4..6)?,
            }),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `rrggbb`, no `#`.
    pub fn to_hex(self) -> String {
        convert::rgb_to_hex(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_css_hex(self) -> String {
        convert::rgb_to_css_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        convert::rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn to_hsv(self) -> Hsv {
        convert::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_cmyk(self) -> Cmyk {
        convert::rgb_to_cmyk(self.r, self.g, self.b)
    }

    pub fn to_hwb(self) -> Hwb {
        convert::rgb_to_hwb(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Parses `rgb(r, g, b)` display strings, validating every channel.
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match convert::parse_rgb_string(s) {
            [Some(r), Some(g), Some(b)] => Self::try_new(r, g, b),
            _ => Err(ColorError::MalformedRgb(s.to_string())),
        }
    }
}

impl Hsl {
    /// Checked constructor: `h` in 0–360, `s`/`l` in 0–100.
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check("hue", h, 0.0, 360.0)? % 360.0,
            s: check("saturation", s, 0.0, 100.0)?,
            l: check("lightness", l, 0.0, 100.0)?,
        })
    }

    pub fn to_rgb(self) -> Rgb {
        convert::hsl_to_rgb(self.h, self.s, self.l)
    }

    /// CSS fill for one hue-wheel wedge: full saturation, half lightness.
    pub fn css_wedge(degree: u16) -> String {
        format!("hsl({degree}, 100%, 50%)")
    }
}

impl Hsv {
    /// Checked constructor: all components in 0–100.
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check("hue", h, 0.0, 100.0)?,
            s: check("saturation", s, 0.0, 100.0)?,
            v: check("value", v, 0.0, 100.0)?,
        })
    }

    /// Hue converted from the 0–100 turn scale to degrees.
    pub fn hue_degrees(self) -> f64 {
        self.h * 3.6
    }

    pub fn to_rgb(self) -> Rgb {
        convert::hsv_to_rgb(self.h, self.s, self.v)
    }
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Result<Self, ColorError> {
        Ok(Self {
            c: check("cyan", c, 0.0, 100.0)?,
            m: check("magenta", m, 0.0, 100.0)?,
            y: check("yellow", y, 0.0, 100.0)?,
            k: check("key", k, 0.0, 100.0)?,
        })
    }

    pub fn to_rgb(self) -> Rgb {
        convert::cmyk_to_rgb(self.c, self.m, self.y, self.k)
    }
}

impl Hwb {
    /// Checked constructor: `h` in 0–360, `w`/`b` in 0–100.
    pub fn new(h: f64, w: f64, b: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: check("hue", h, 0.0, 360.0)?,
            w: check("whiteness", w, 0.0, 100.0)?,
            b: check("blackness", b, 0.0, 100.0)?,
        })
    }

    pub fn is_achromatic(self) -> bool {
        self.h == 0.0 || self.w + self.b >= 100.0
    }

    pub fn to_rgb(self) -> Rgb {
        convert::hwb_to_rgb(self.h, self.w, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round() as i64 % 360,
            self.s.round() as i64,
            self.l.round() as i64
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            self.hue_degrees().round() as i64 % 360,
            self.s.round() as i64,
            self.v.round() as i64
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c.round() as i64,
            self.m.round() as i64,
            self.y.round() as i64,
            self.k.round() as i64
        )
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hwb({} {}% {}%)",
            self.h.round() as i64 % 360,
            self.w.round() as i64,
            self.b.round() as i64
        )
    }
}
