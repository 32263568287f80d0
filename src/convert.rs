//! Positional color-model conversions.
//!
//! Every forward function takes 8-bit RGB channels. Every inverse takes the
//! model's components on the scales documented on its type in
//! [`crate::color`], sanitizes them (non-finite → 0, then clamp), and
//! returns a rounded [`Rgb`]. None of these functions fail.

use crate::color::{Cmyk, Hsl, Hsv, Hwb, Rgb};
use crate::math::{self, channel, finite_or_zero, percent, unit};

/// RGB → HSL. Hue in degrees, saturation/lightness in percent.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (unit(r), unit(g), unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: (sector * 60.0).rem_euclid(360.0),
        s: (s * 100.0).clamp(0.0, 100.0),
        l: (l * 100.0).clamp(0.0, 100.0),
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL → RGB. Hue wraps modulo 360; saturation/lightness clamp to 0–100.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = finite_or_zero(h).rem_euclid(360.0) / 360.0;
    let s = percent(s);
    let l = percent(l);

    if s == 0.0 {
        let v = channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    Rgb::new(
        channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        channel(hue_to_channel(p, q, h)),
        channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// RGB → HSV, all components on a 0–100 scale.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) + d * if g < b { 6.0 } else { 0.0 }) / (6.0 * d)
    } else if max == g {
        ((b - r) + d * 2.0) / (6.0 * d)
    } else {
        ((r - g) + d * 4.0) / (6.0 * d)
    };

    Hsv {
        h: (h * 100.0).clamp(0.0, 100.0),
        s: (s * 100.0).clamp(0.0, 100.0),
        v: (max / 255.0 * 100.0).clamp(0.0, 100.0),
    }
}

/// HSV → RGB, all inputs on a 0–100 scale.
///
/// Sector `i = floor(h * 6)` is closed below and open above; a hue of
/// exactly 100 lands back in sector 0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = percent(h);
    let s = percent(s);
    let v = percent(v);

    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

/// RGB → CMYK percentages. Black yields `{0, 0, 0, 100}`.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    let c = 1.0 - unit(r);
    let m = 1.0 - unit(g);
    let y = 1.0 - unit(b);
    let k = c.min(m).min(y);

    // k == 1 turns these into 0 / 0.
    let scale = |x: f64| (finite_or_zero((x - k) / (1.0 - k)) * 100.0).clamp(0.0, 100.0);
    Cmyk {
        c: scale(c),
        m: scale(m),
        y: scale(y),
        k: (finite_or_zero(k) * 100.0).clamp(0.0, 100.0),
    }
}

/// CMYK percentages → RGB.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Rgb {
    let k = percent(k);
    let ink = |x: f64| channel(finite_or_zero((1.0 - percent(x)) * (1.0 - k)));
    Rgb::new(ink(c), ink(m), ink(y))
}

/// RGB → HWB. Gray returns hue 0 straight away; chromatic hues are in
/// `(0, 360]`.
pub fn rgb_to_hwb(r: u8, g: u8, b: u8) -> Hwb {
    let (r, g, b) = (unit(r), unit(g), unit(b));
    let w = r.min(g).min(b);
    let v = r.max(g).max(b);
    let black = 1.0 - v;

    if v == w {
        return Hwb {
            h: 0.0,
            w: w * 100.0,
            b: black * 100.0,
        };
    }

    let (f, i) = if r == w {
        (g - b, 3.0)
    } else if g == w {
        (b - r, 5.0)
    } else {
        (r - g, 1.0)
    };

    Hwb {
        h: ((i - f / (v - w)) * 60.0).clamp(0.0, 360.0),
        w: (w * 100.0).clamp(0.0, 100.0),
        b: (black * 100.0).clamp(0.0, 100.0),
    }
}

/// HWB → RGB. Hue in degrees (0 means achromatic), whiteness/blackness in
/// percent.
pub fn hwb_to_rgb(h: f64, w: f64, b: f64) -> Rgb {
    let h = finite_or_zero(h).clamp(0.0, 360.0);
    let w = percent(w);
    let b = percent(b);

    if w + b >= 1.0 {
        let gray = channel(w / (w + b));
        return Rgb::new(gray, gray, gray);
    }

    let v = 1.0 - b;
    if h == 0.0 {
        let gray = channel(v);
        return Rgb::new(gray, gray, gray);
    }

    let h6 = h / 60.0;
    let i = h6.floor() as u32;
    let mut f = h6 - i as f64;
    if i & 1 == 1 {
        f = 1.0 - f;
    }
    let n = w + f * (v - w);

    let (r, g, b) = match i {
        1 => (n, v, w),
        2 => (w, v, n),
        3 => (w, n, v),
        4 => (n, w, v),
        5 => (v, w, n),
        // 0 and 6 (hue 360) are both red-leading.
        _ => (v, n, w),
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Lowercase, zero-padded `rrggbb` with no `#`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{:06x}", (r as u32) << 16 | (g as u32) << 8 | b as u32)
}

/// Lowercase, zero-padded `#rrggbb`.
pub fn rgb_to_css_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{}", rgb_to_hex(r, g, b))
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Trailing junk is ignored; no digits yields `None`.
fn parse_int_prefix(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (sign, rest) = match token.as_bytes().first() {
        Some(b'-') => (-1, &token[1..]),
        Some(b'+') => (1, &token[1..]),
        _ => (1, token),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    rest[..digits].parse::<i64>().ok().map(|n| sign * n)
}

/// Pull three integers out of an `rgb(r, g, b)`-shaped string.
///
/// Strips the literals `,` `rgb(` `)` and splits on spaces. Entries that do
/// not parse come back as `None`; nothing is range-checked. Use
/// [`Rgb::from_str`](std::str::FromStr) for a validated parse.
pub fn parse_rgb_string(text: &str) -> [Option<i64>; 3] {
    let stripped = text.replace(',', "").replace("rgb(", "").replace(')', "");
    let mut tokens = stripped.split(' ').map(parse_int_prefix);
    let mut next = || tokens.next().flatten();
    [next(), next(), next()]
}

/// Hue in degrees of an RGB color, 0 for grays.
pub fn hue_of(c: Rgb) -> f64 {
    rgb_to_hsl(c.r, c.g, c.b).h
}

/// Angular distance between the hues of two colors.
pub fn hue_delta(a: Rgb, b: Rgb) -> f64 {
    math::hue_distance(hue_of(a), hue_of(b))
}
