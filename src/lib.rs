//! # floem-hue
//!
//! A hue-wheel color picker for [Floem](https://github.com/lapce/floem),
//! built on a small color-model conversion engine.
//!
//! The engine converts between RGB, HSL, HSV, CMYK, HWB, and hex, and
//! renders a 360-wedge hue wheel into an RGBA raster that can be sampled
//! back. The Floem view is a thin shell over both.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hue::{hue_picker, Rgb, WheelConfig};
//!
//! let color = RwSignal::new(Rgb::new(59, 130, 246));
//! let picker = hue_picker(color, WheelConfig::default()).expect("default config is valid");
//! // Use `picker` in your Floem view tree.
//! ```
//!
//! The engine is usable without a window:
//!
//! ```rust
//! use floem_hue::{convert, hue_distance, rasterize_hue_wheel, sample_at, WheelConfig};
//!
//! let raster = rasterize_hue_wheel(&WheelConfig::with_size(100)).unwrap();
//! let picked = sample_at(&raster, 95.0, 50.0).unwrap();
//! assert!(hue_distance(convert::hue_of(picked), 0.0) <= 2.0);
//! assert_eq!(convert::rgb_to_hex(255, 0, 128), "ff0080");
//! ```

mod color;
mod config;
mod constants;
pub mod convert;
mod error;
mod hue_wheel;
mod math;
mod picker;
mod readout;
mod sampler;
mod surface;
mod wheel;

pub use color::{Cmyk, Hsl, Hsv, Hwb, Rgb};
pub use config::WheelConfig;
pub use error::{ColorError, ConfigError};
pub use math::hue_distance;
pub use readout::copy_to_clipboard;
pub use sampler::{clamp_to_buffer, is_close_to_color, locate_color, sample_at};
pub use surface::{PixelBuffer, RasterSurface, Surface};
pub use wheel::{rasterize_hue_wheel, render_hue_wheel, wedge_color};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level hue picker view.
///
/// Renders the wheel described by `config` once, then binds the picker to
/// `color`: picking on the wheel writes the signal, and external changes
/// to the signal move the wheel's cursor and refresh every readout row.
pub fn hue_picker(
    color: RwSignal<Rgb>,
    config: WheelConfig,
) -> Result<impl IntoView, ColorError> {
    let raster = rasterize_hue_wheel(&config)?;
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    Ok(picker::picker_panel(color, raster, config.tolerance))
}
