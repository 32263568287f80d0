//! Reading colors back out of a rendered raster.

use floem::kurbo::Point;

use crate::color::Rgb;
use crate::surface::PixelBuffer;

/// RGB at `(round(y), round(x))`.
///
/// Returns `None` when the rounded coordinate falls outside the buffer;
/// clamp first with [`clamp_to_buffer`] if an edge pixel is wanted instead.
pub fn sample_at(buffer: &PixelBuffer, y: f64, x: f64) -> Option<Rgb> {
    let (x, y) = (x.round(), y.round());
    if !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let [r, g, b, _] = buffer.pixel(x as u32, y as u32)?;
    log::trace!("sampled ({x}, {y}) -> rgb({r}, {g}, {b})");
    Some(Rgb::new(r, g, b))
}

/// Clamp a raster-space point into the buffer's pixel range.
pub fn clamp_to_buffer(buffer: &PixelBuffer, point: Point) -> Point {
    let max_x = buffer.width().saturating_sub(1) as f64;
    let max_y = buffer.height().saturating_sub(1) as f64;
    Point::new(point.x.clamp(0.0, max_x), point.y.clamp(0.0, max_y))
}

/// Whether `target` matches `c` exactly on two channels and lies within
/// `±tolerance` on the third.
///
/// This is a per-channel test, not a color distance: a difference in two
/// channels is never close, however small.
pub fn is_close_to_color(c: Rgb, target: Rgb, tolerance: u8) -> bool {
    let near = |a: u8, b: u8| (a as i16 - b as i16).abs() <= tolerance as i16;
    (near(c.r, target.r) && c.g == target.g && c.b == target.b)
        || (c.r == target.r && near(c.g, target.g) && c.b == target.b)
        || (c.r == target.r && c.g == target.g && near(c.b, target.b))
}

/// Centroid of the opaque pixels whose color is close to `target`.
///
/// On a hue wheel the matches form a thin wedge, so the centroid sits about
/// halfway along that wedge's radius.
pub fn locate_color(buffer: &PixelBuffer, target: Rgb, tolerance: u8) -> Option<Point> {
    let (mut sx, mut sy, mut count) = (0.0, 0.0, 0u32);
    for (x, y, [r, g, b, a]) in buffer.pixels() {
        if a == 255 && is_close_to_color(Rgb::new(r, g, b), target, tolerance) {
            sx += x as f64;
            sy += y as f64;
            count += 1;
        }
    }
    if count == 0 {
        log::trace!("{target} not found on raster");
        return None;
    }
    Some(Point::new(sx / count as f64, sy / count as f64))
}
