//! Numeric helpers shared by the converters, the rasterizer and the widget.

/// 0–255 channel → 0.0–1.0.
#[inline]
pub(crate) fn unit(channel: u8) -> f64 {
    channel as f64 / 255.0
}

/// 0.0–1.0 → 0–255 channel, rounded. NaN maps to 0.
#[inline]
pub(crate) fn channel(unit: f64) -> u8 {
    if unit.is_nan() {
        return 0;
    }
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Replace NaN and infinities with 0.
#[inline]
pub(crate) fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// Sanitize a percentage input: non-finite → 0, then clamp to 0–100, then
/// scale to 0.0–1.0.
#[inline]
pub(crate) fn percent(x: f64) -> f64 {
    finite_or_zero(x).clamp(0.0, 100.0) / 100.0
}

/// Linearly map `point` from `[start, end]` onto `[min, max]`.
///
/// ```text
/// (0 start) -----.----- (10 end)        point = 5
/// (10 min) ---------.--------- (30 max) result = 20
/// ```
pub(crate) fn map_range(point: f64, start: f64, end: f64, min: f64, max: f64) -> f64 {
    let per = (point - start) / (end - start);
    (max - min) * per + min
}

/// Shortest distance between two hues in degrees, in 0–180.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
