//! Drawing surface abstraction and a software rasterizer behind it.
//!
//! The hue wheel is drawn through [`Surface`] so the renderer never reaches
//! for a shared canvas; whoever renders owns the surface for that call.

use floem::kurbo::Point;

use crate::color::Rgb;
use crate::error::ColorError;

/// RGBA8 raster, row-major, origin top-left.
///
/// `data.len() == width * height * 4` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA bytes. Returns `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGBA at integer coordinates, `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Iterate `(x, y, rgba)` over every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let width = self.width.max(1);
        self.data.chunks_exact(4).enumerate().map(move |(i, p)| {
            let i = i as u32;
            (i % width, i / width, [p[0], p[1], p[2], p[3]])
        })
    }
}

/// Minimal path-filling drawing context.
///
/// `move_to` begins a new path; `fill` paints the current path with the
/// current fill color.
pub trait Surface {
    fn fill_style(&mut self, color: Rgb);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn fill(&mut self);
    /// Copy a rectangle out as a standalone buffer. Areas outside the
    /// surface read as transparent black.
    fn image_data(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer;
}

/// Software [`Surface`] that fills polygons on a supersampled grid.
///
/// Each pixel owns `supersample²` samples; a sample is either unpainted or
/// holds the last fill that covered it. [`Surface::image_data`] box-filters
/// samples back to pixels, so alpha is the covered fraction.
pub struct RasterSurface {
    width: u32,
    height: u32,
    supersample: u32,
    samples: Vec<Option<Rgb>>,
    fill: Rgb,
    path: Vec<Point>,
    crossings: Vec<f64>,
}

impl RasterSurface {
    /// Fails with [`ColorError::InvalidSize`] when the sample grid does not
    /// fit in memory addressing.
    pub fn new(width: u32, height: u32, supersample: u32) -> Result<Self, ColorError> {
        let supersample = supersample.max(1);
        let n = supersample as usize;
        let len = (width as usize)
            .checked_mul(n)
            .zip((height as usize).checked_mul(n))
            .and_then(|(cols, rows)| cols.checked_mul(rows))
            .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<Option<Rgb>>())
            .ok_or(ColorError::InvalidSize(width.max(height)))?;
        Ok(Self {
            width,
            height,
            supersample,
            samples: vec![None; len],
            fill: Rgb::BLACK,
            path: Vec::new(),
            crossings: Vec::new(),
        })
    }

    /// Scanline fill of `self.path` with the even-odd rule. A sample is
    /// inside when its center lies in `[left, right)` of a crossing pair.
    fn fill_path(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        let n = self.supersample as f64;
        let cols = self.width as i64 * self.supersample as i64;
        let rows = self.height as i64 * self.supersample as i64;

        let (min_y, max_y) = self
            .path
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let first = ((min_y * n - 0.5).ceil() as i64).max(0);
        let last = ((max_y * n - 0.5).floor() as i64).min(rows - 1);

        for row in first..=last {
            let y = (row as f64 + 0.5) / n;
            self.crossings.clear();
            for (i, a) in self.path.iter().enumerate() {
                let b = self.path[(i + 1) % self.path.len()];
                if (a.y <= y) != (b.y <= y) {
                    let t = (y - a.y) / (b.y - a.y);
                    self.crossings.push(a.x + t * (b.x - a.x));
                }
            }
            self.crossings.sort_by(f64::total_cmp);

            let row_start = row as usize * cols as usize;
            for pair in self.crossings.chunks_exact(2) {
                let start = ((pair[0] * n - 0.5).ceil() as i64).max(0);
                let end = ((pair[1] * n - 0.5).ceil() as i64).min(cols);
                for col in start..end {
                    self.samples[row_start + col as usize] = Some(self.fill);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn fill_style(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn move_to(&mut self, point: Point) {
        self.path.clear();
        self.path.push(point);
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(point);
    }

    fn fill(&mut self) {
        self.fill_path();
    }

    fn image_data(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer {
        let mut out = PixelBuffer::new(width, height);
        let n = self.supersample as usize;
        let cols = self.width as usize * n;
        let total = (n * n) as u32;

        for oy in 0..height {
            let py = y + oy;
            if py >= self.height {
                break;
            }
            for ox in 0..width {
                let px = x + ox;
                if px >= self.width {
                    break;
                }
                let (mut sum, mut covered) = ([0u32; 3], 0u32);
                for sy in 0..n {
                    let row = (py as usize * n + sy) * cols;
                    for sx in 0..n {
                        if let Some(c) = self.samples[row + px as usize * n + sx] {
                            sum[0] += c.r as u32;
                            sum[1] += c.g as u32;
                            sum[2] += c.b as u32;
                            covered += 1;
                        }
                    }
                }
                if covered == 0 {
                    continue;
                }
                let i = (oy as usize * width as usize + ox as usize) * 4;
                let avg = |s: u32| ((s + covered / 2) / covered) as u8;
                out.data[i] = avg(sum[0]);
                out.data[i + 1] = avg(sum[1]);
                out.data[i + 2] = avg(sum[2]);
                out.data[i + 3] = ((covered * 255 + total / 2) / total) as u8;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(surface: &mut RasterSurface, x0: f64, y0: f64, x1: f64, y1: f64) {
        surface.move_to(Point::new(x0, y0));
        surface.line_to(Point::new(x1, y0));
        surface.line_to(Point::new(x1, y1));
        surface.line_to(Point::new(x0, y1));
        surface.fill();
    }

    #[test]
    fn buffer_length_invariant() {
        let buf = PixelBuffer::new(7, 3);
        assert_eq!(buf.as_bytes().len(), 7 * 3 * 4);
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_none());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let buf = PixelBuffer::new(4, 4);
        assert_eq!(buf.pixel(3, 3), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(4, 0), None);
        assert_eq!(buf.pixel(0, 4), None);
    }

    #[test]
    fn pixels_iterates_row_major() {
        let buf = PixelBuffer::new(3, 2);
        let coords: Vec<_> = buf.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn oversized_sample_grid_is_rejected() {
        assert!(matches!(
            RasterSurface::new(u32::MAX, u32::MAX, 16),
            Err(ColorError::InvalidSize(u32::MAX))
        ));
        assert!(RasterSurface::new(8, 8, 0).is_ok());
    }

    #[test]
    fn fill_covers_whole_pixels() {
        let mut surface = RasterSurface::new(4, 4, 4).unwrap();
        surface.fill_style(Rgb::new(10, 20, 30));
        square(&mut surface, 1.0, 1.0, 3.0, 3.0);
        let buf = surface.image_data(0, 0, 4, 4);
        assert_eq!(buf.pixel(1, 1), Some([10, 20, 30, 255]));
        assert_eq!(buf.pixel(2, 2), Some([10, 20, 30, 255]));
        assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(3, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn partial_coverage_sets_alpha() {
        let mut surface = RasterSurface::new(2, 1, 4).unwrap();
        surface.fill_style(Rgb::WHITE);
        square(&mut surface, 0.0, 0.0, 0.5, 1.0);
        let buf = surface.image_data(0, 0, 2, 1);
        assert_eq!(buf.pixel(0, 0), Some([255, 255, 255, 128]));
        assert_eq!(buf.pixel(1, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn later_fill_paints_over() {
        let mut surface = RasterSurface::new(2, 2, 2).unwrap();
        surface.fill_style(Rgb::new(255, 0, 0));
        square(&mut surface, 0.0, 0.0, 2.0, 2.0);
        surface.fill_style(Rgb::new(0, 0, 255));
        square(&mut surface, 0.0, 0.0, 1.0, 2.0);
        let buf = surface.image_data(0, 0, 2, 2);
        assert_eq!(buf.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(buf.pixel(1, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn move_to_starts_a_new_path() {
        let mut surface = RasterSurface::new(4, 4, 1).unwrap();
        surface.fill_style(Rgb::WHITE);
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(4.0, 0.0));
        surface.move_to(Point::new(0.0, 2.0));
        surface.line_to(Point::new(4.0, 2.0));
        surface.line_to(Point::new(4.0, 4.0));
        surface.line_to(Point::new(0.0, 4.0));
        surface.fill();
        let buf = surface.image_data(0, 0, 4, 4);
        assert_eq!(buf.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(buf.pixel(0, 3).map(|p| p[3]), Some(255));
    }

    #[test]
    fn image_data_outside_reads_transparent() {
        let mut surface = RasterSurface::new(2, 2, 1).unwrap();
        surface.fill_style(Rgb::WHITE);
        square(&mut surface, 0.0, 0.0, 2.0, 2.0);
        let buf = surface.image_data(1, 1, 3, 3);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(buf.pixel(1, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(2, 2), Some([0, 0, 0, 0]));
    }
}
