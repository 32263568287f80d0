//! Standalone demo: opens a window with the hue picker.
//!
//! Pass a RON file path to override the wheel config, e.g.
//! `cargo run --example basic -- wheel.ron`.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hue::{hue_picker, Rgb, WheelConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WheelConfig::load(path)?,
        None => WheelConfig::default(),
    };
    let color = RwSignal::new(Rgb::from_hex("3b82f6")?);
    // Fail before opening a window if the config cannot render.
    config.validate()?;

    floem::Application::new()
        .window(
            move |_| {
                match hue_picker(color, config.clone()) {
                    Ok(picker) => picker.into_any(),
                    Err(e) => label(move || format!("cannot render wheel: {e}")).into_any(),
                }
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 520.0))
                    .title("floem-hue"),
            ),
        )
        .run();
    Ok(())
}
