//! Rendering, picking, and styling constants.

/// Default side of the rasterized wheel, in pixels
pub const WHEEL_RASTER_SIZE: u32 = 260;

/// Angular width of one wedge. Must exceed 1° so neighbors overlap.
pub const WEDGE_STEP_DEGREES: f64 = 1.4;

/// Upper bound accepted for the wedge step
pub const MAX_WEDGE_STEP_DEGREES: f64 = 10.0;

/// Samples per pixel axis in the software rasterizer
pub const SUPERSAMPLE: u32 = 4;

pub const MAX_SUPERSAMPLE: u32 = 16;

/// Largest raster side accepted by the wheel config
pub const MAX_WHEEL_SIZE: u32 = 4096;

/// Default single-channel tolerance for locating a color on the wheel.
/// Adjacent wedge hues differ by about 4.25 in their varying channel.
pub const LOCATE_TOLERANCE: u8 = 4;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 8.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Swatch edge length
pub const SWATCH_SIZE: f32 = 32.0;

/// Border radius for the swatch
pub const RADIUS: f32 = 4.0;

/// Width of the model label column in readout rows
pub const LABEL_WIDTH: f32 = 36.0;

/// Readout value font size
pub const VALUE_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;
