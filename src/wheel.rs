//! Hue wheel rendering.
//!
//! The wheel is 360 triangular wedges fanned around the center, one per
//! integer degree, each a solid `hsl(i, 100%, 50%)`. Angle 0 points straight
//! down and angles grow toward +x. Every wedge is a little wider than one
//! degree so it overlaps the next and no seams show.

use floem::kurbo::Point;

use crate::color::{Hsl, Rgb};
use crate::config::WheelConfig;
use crate::convert;
use crate::error::ColorError;
use crate::surface::{PixelBuffer, RasterSurface, Surface};

/// Solid color of the wedge starting at `degree`.
pub fn wedge_color(degree: u16) -> Rgb {
    convert::hsl_to_rgb(degree as f64, 100.0, 50.0)
}

/// Point on the rim at `angle` radians.
fn rim_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.sin(),
        center.y + radius * angle.cos(),
    )
}

/// Draw the wheel onto `surface` and extract the `size × size` raster.
///
/// Wedges are filled in increasing degree order, so where neighbors overlap
/// the later wedge wins.
pub fn render_hue_wheel<S: Surface>(
    surface: &mut S,
    config: &WheelConfig,
) -> Result<PixelBuffer, ColorError> {
    config.validate()?;

    let size = config.size;
    let radius = size as f64 / 2.0;
    let center = Point::new(radius, radius);
    let step = config.wedge_step_degrees.to_radians();
    log::debug!(
        "rendering hue wheel: size={size} step={}°",
        config.wedge_step_degrees
    );

    for degree in 0..360u16 {
        let angle = (degree as f64).to_radians();
        surface.fill_style(wedge_color(degree));
        surface.move_to(center);
        surface.line_to(rim_point(center, radius, angle));
        surface.line_to(rim_point(center, radius, angle + step));
        surface.fill();
        log::trace!("wedge {}", Hsl::css_wedge(degree));
    }

    let raster = surface.image_data(0, 0, size, size);
    log::debug!("hue wheel rendered: {} bytes", raster.as_bytes().len());
    Ok(raster)
}

/// Render the wheel with the built-in software rasterizer.
pub fn rasterize_hue_wheel(config: &WheelConfig) -> Result<PixelBuffer, ColorError> {
    config.validate()?;
    let mut surface = RasterSurface::new(config.size, config.size, config.supersample)?;
    render_hue_wheel(&mut surface, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hue_distance;
    use crate::sampler::sample_at;

    /// Records every call instead of drawing.
    #[derive(Default)]
    struct Recorder {
        fills: Vec<Rgb>,
        paths: Vec<Vec<Point>>,
    }

    impl Surface for Recorder {
        fn fill_style(&mut self, color: Rgb) {
            self.fills.push(color);
        }
        fn move_to(&mut self, point: Point) {
            self.paths.push(vec![point]);
        }
        fn line_to(&mut self, point: Point) {
            if let Some(path) = self.paths.last_mut() {
                path.push(point);
            }
        }
        fn fill(&mut self) {}
        fn image_data(&self, _x: u32, _y: u32, width: u32, height: u32) -> PixelBuffer {
            PixelBuffer::new(width, height)
        }
    }

    #[test]
    fn draws_one_triangle_per_degree() {
        let mut recorder = Recorder::default();
        let raster = render_hue_wheel(&mut recorder, &WheelConfig::with_size(100)).unwrap();

        assert_eq!(recorder.fills.len(), 360);
        assert_eq!(recorder.paths.len(), 360);
        assert!(recorder.paths.iter().all(|p| p.len() == 3));
        assert_eq!(recorder.fills[0], Rgb::new(255, 0, 0));
        assert_eq!(recorder.fills[120], Rgb::new(0, 255, 0));
        assert_eq!(recorder.fills[240], Rgb::new(0, 0, 255));
        assert_eq!((raster.width(), raster.height()), (100, 100));
    }

    #[test]
    fn first_wedge_points_down() {
        let mut recorder = Recorder::default();
        render_hue_wheel(&mut recorder, &WheelConfig::with_size(100)).unwrap();
        let wedge = &recorder.paths[0];
        assert_eq!(wedge[0], Point::new(50.0, 50.0));
        assert_eq!(wedge[1], Point::new(50.0, 100.0));
        assert!(wedge[2].x > 50.0 && wedge[2].y < 100.0);
    }

    #[test]
    fn invalid_size_is_rejected() {
        let mut recorder = Recorder::default();
        assert!(matches!(
            render_hue_wheel(&mut recorder, &WheelConfig::with_size(0)),
            Err(ColorError::InvalidSize(0))
        ));
        assert!(recorder.fills.is_empty());
    }

    #[test]
    fn oversized_wheel_is_an_error() {
        let config = WheelConfig {
            size: 300_000_000,
            supersample: 16,
            ..WheelConfig::default()
        };
        assert!(matches!(
            rasterize_hue_wheel(&config),
            Err(ColorError::InvalidSize(300_000_000))
        ));
    }

    #[test]
    fn zero_degree_sample_is_red() {
        let raster = rasterize_hue_wheel(&WheelConfig::with_size(100)).unwrap();
        let c = sample_at(&raster, 95.0, 50.0).unwrap();
        let hue = convert::hue_of(c);
        assert!(hue_distance(hue, 0.0) <= 2.0, "{c:?} has hue {hue}");
    }

    #[test]
    fn quarter_turn_sample_matches_its_wedge() {
        let raster = rasterize_hue_wheel(&WheelConfig::with_size(100)).unwrap();
        let c = sample_at(&raster, 50.0, 85.0).unwrap();
        let hue = convert::hue_of(c);
        assert!(hue_distance(hue, 89.0) <= 2.5, "{c:?} has hue {hue}");
    }

    #[test]
    fn inside_is_opaque_outside_is_transparent() {
        let size = 64u32;
        let raster = rasterize_hue_wheel(&WheelConfig::with_size(size)).unwrap();
        let r = size as f64 / 2.0;
        for (x, y, px) in raster.pixels() {
            let dx = x as f64 + 0.5 - r;
            let dy = y as f64 + 0.5 - r;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < r - 1.5 {
                assert_eq!(px[3], 255, "({x}, {y}) at {dist}");
            } else if dist > r + 1.0 {
                assert_eq!(px[3], 0, "({x}, {y}) at {dist}");
            }
        }
    }
}
