//! Picker panel: hue wheel, swatch, and one readout row per color model.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::Rgb;
use crate::constants;
use crate::hue_wheel::hue_wheel;
use crate::readout::{copy_button, readout_row};
use crate::surface::PixelBuffer;

/// Creates the panel around an already rendered wheel raster.
pub(crate) fn picker_panel(
    color: RwSignal<Rgb>,
    raster: PixelBuffer,
    tolerance: u8,
) -> impl IntoView {
    v_stack((
        hue_wheel(color, raster, tolerance).style(|s| s.margin_top(12.0)),
        // Hex + swatch row
        h_stack((
            label(move || color.get().to_css_hex()).style(|s| {
                s.font_size(constants::VALUE_FONT + 2.0)
                    .font_family("monospace".to_string())
            }),
            copy_button(move || color.get().to_css_hex()),
            // Spacer pushes swatch to the right
            empty().style(|s| s.flex_grow(1.0)),
            empty().style(move |st| {
                let c = color.get();
                st.width(constants::SWATCH_SIZE)
                    .height(constants::SWATCH_SIZE)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(c.r, c.g, c.b))
            }),
        ))
        .style(|st| st.items_center().gap(constants::GAP / 2.0).margin_horiz(8.0)),
        readout_row("HEX", move || color.get().to_hex()),
        readout_row("RGB", move || color.get().to_string()),
        readout_row("HSL", move || color.get().to_hsl().to_string()),
        readout_row("HSV", move || color.get().to_hsv().to_string()),
        readout_row("CMYK", move || color.get().to_cmyk().to_string()),
        readout_row("HWB", move || color.get().to_hwb().to_string()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
