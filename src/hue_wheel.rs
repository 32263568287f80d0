//! Hue wheel view.
//!
//! Paints a pre-rendered wheel raster scaled to the widget's square and
//! turns pointer presses into sampled colors. The raster is rendered once
//! by the caller; this view never redraws wedges.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::Rgb;
use crate::constants;
use crate::math;
use crate::sampler;
use crate::surface::PixelBuffer;

enum WheelUpdate {
    Color(Rgb),
}

pub(crate) struct HueWheel {
    id: ViewId,
    held: bool,
    size: floem::taffy::prelude::Size<f32>,
    raster: PixelBuffer,
    tolerance: u8,
    selected: Rgb,
    /// Raster-space position of the selected color, if it is on the wheel.
    cursor: Option<Point>,
    on_pick: Option<Box<dyn Fn(Rgb)>>,
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a hue wheel bound to `color`.
///
/// Picking writes the sampled color into the signal; external changes to
/// the signal move the cursor to wherever that color appears on `raster`.
pub(crate) fn hue_wheel(color: RwSignal<Rgb>, raster: PixelBuffer, tolerance: u8) -> HueWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(WheelUpdate::Color(c));
    });

    let selected = color.get_untracked();
    let cursor = sampler::locate_color(&raster, selected, tolerance);

    HueWheel {
        id,
        held: false,
        size: Default::default(),
        raster,
        tolerance,
        selected,
        cursor,
        on_pick: Some(Box::new(move |c| color.set(c))),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

/// Renderer cache key for `raster`. Derived from the pixels, so wheels of
/// the same size rendered with different settings never share an image.
fn image_key(raster: &PixelBuffer) -> Vec<u8> {
    let mut hasher = DefaultHasher::new();
    raster.width().hash(&mut hasher);
    raster.height().hash(&mut hasher);
    raster.as_bytes().hash(&mut hasher);
    let hash = hasher.finish();
    format!("hue-wheel-{}-{hash:016x}", raster.width()).into_bytes()
}

impl HueWheel {
    fn radius(&self) -> f64 {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        w.min(h) / 2.0
    }

    fn center(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (w / 2.0, h / 2.0)
    }

    /// The square rect centered within the widget, used for drawing the wheel.
    fn wheel_rect(&self) -> Rect {
        let (cx, cy) = self.center();
        let r = self.radius();
        Rect::new(cx - r, cy - r, cx + r, cy + r)
    }

    fn to_raster(&self, pos: Point) -> Point {
        let rect = self.wheel_rect();
        let side = self.raster.width() as f64;
        Point::new(
            math::map_range(pos.x, rect.x0, rect.x1, 0.0, side),
            math::map_range(pos.y, rect.y0, rect.y1, 0.0, side),
        )
    }

    fn to_widget(&self, raster_pos: Point) -> Point {
        let rect = self.wheel_rect();
        let side = self.raster.width() as f64;
        Point::new(
            math::map_range(raster_pos.x, 0.0, side, rect.x0, rect.x1),
            math::map_range(raster_pos.y, 0.0, side, rect.y0, rect.y1),
        )
    }

    /// Sample the raster under `pos`. Returns the picked color, or `None`
    /// when the pointer is off the wheel.
    fn pick_at(&mut self, pos: Point) -> Option<Rgb> {
        if self.radius() <= 0.0 || self.raster.is_empty() {
            return None;
        }
        let half = self.raster.width() as f64 / 2.0;
        let p = self.to_raster(pos);
        if (p.x - half).hypot(p.y - half) > half {
            return None;
        }

        let p = sampler::clamp_to_buffer(&self.raster, p);
        let alpha = self.raster.pixel(p.x.round() as u32, p.y.round() as u32)?[3];
        if alpha == 0 {
            return None;
        }
        let picked = sampler::sample_at(&self.raster, p.y, p.x)?;
        self.selected = picked;
        self.cursor = Some(p);
        Some(picked)
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() || self.raster.is_empty() {
            return;
        }

        let side = self.raster.width();
        let blob = Blob::new(Arc::new(self.raster.as_bytes().to_vec()));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, side, self.raster.height());

        self.wheel_hash = image_key(&self.raster);
        self.wheel_img = Some(img);
    }

    fn handle_pointer(&mut self, pos: Point) {
        if let Some(c) = self.pick_at(pos) {
            if let Some(cb) = &self.on_pick {
                cb(c);
            }
            self.id.request_layout();
        }
    }
}

impl View for HueWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Color(c) => {
                    if c != self.selected {
                        self.selected = c;
                        self.cursor = sampler::locate_color(&self.raster, c, self.tolerance);
                    }
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.handle_pointer(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.handle_pointer(e.pos);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let (center_x, center_y) = self.center();
        let wheel_rect = self.wheel_rect();
        let clip = Circle::new(Point::new(center_x, center_y), self.radius());

        cx.save();
        cx.clip(&clip);
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        let Some(cursor) = self.cursor else {
            return;
        };
        let cur_pt = self.to_widget(cursor);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let ring = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&ring, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(cur_pt, constants::CURSOR_RADIUS - 1.5);
        let c = self.selected;
        cx.fill(&inner, Color::rgb8(c.r, c.g, c.b), 0.0);
    }
}
