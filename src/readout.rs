//! Read-only color rows with copy buttons.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::error::ColorError;

/// One labeled row: model name, current display string, copy button.
///
/// `text` is re-evaluated whenever the signals it reads change.
pub(crate) fn readout_row(
    lbl: &'static str,
    text: impl Fn() -> String + Copy + 'static,
) -> impl IntoView {
    h_stack((
        label(move || lbl).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        label(text).style(|s| {
            s.flex_grow(1.0)
                .font_size(constants::VALUE_FONT)
                .font_family("monospace".to_string())
        }),
        copy_button(text),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let _ = copy_to_clipboard(&get_text());
    })
}

/// Put `text` on the system clipboard. Failures are logged at `warn` level
/// before being returned.
pub fn copy_to_clipboard(text: &str) -> Result<(), ColorError> {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    if let Err(e) = &result {
        log::warn!("failed to copy {text:?} to clipboard: {e}");
    }
    result.map_err(ColorError::from)
}
