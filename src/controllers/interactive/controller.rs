use std::time::Instant;

use log::{debug, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::input::{Button, InputEvent, WheelDirection};
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::view_state::ViewState;
use crate::core::fractals::multibrot::colour_mapping::errors::ConfigurationError;
use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;
use crate::core::fractals::multibrot::multibrot_config::{
    MAX_MAGNIFICATION, MAX_PAN, MIN_MAGNIFICATION, TRANSFORM_EXPONENT_STEP,
    TRANSFORM_ROTATION_STEP_DEGREES, ZOOM_FACTOR,
};
use crate::core::util::pixel_to_complex_coords::to_complex;

fn zoomed_in(magnification: f64) -> f64 {
    (magnification * ZOOM_FACTOR).min(MAX_MAGNIFICATION)
}

fn zoomed_out(magnification: f64) -> f64 {
    (magnification / ZOOM_FACTOR).max(MIN_MAGNIFICATION)
}

fn bounded_pan(pan: f64) -> f64 {
    pan.clamp(-MAX_PAN, MAX_PAN)
}

/// Moves the view by a screen-space offset, scaled so the apparent speed does
/// not depend on the zoom level.
fn panned(view: ViewState, dx: f64, dy: f64) -> ViewState {
    ViewState {
        pan_x: bounded_pan(view.pan_x - dx / view.magnification),
        pan_y: bounded_pan(view.pan_y - dy / view.magnification),
        ..view
    }
}

/// `w`/`a`/`s`/`d` as a pixel offset for [`panned`], scaled by the move speed.
fn key_offset(key: char, move_speed: f64) -> Option<(f64, f64)> {
    match key {
        'w' => Some((0.0, move_speed)),
        'a' => Some((-move_speed, 0.0)),
        's' => Some((0.0, -move_speed)),
        'd' => Some((move_speed, 0.0)),
        _ => None,
    }
}

/// The view that results from applying `event` to `view`.
///
/// Total over every well-formed event. Keys other than `w`/`a`/`s`/`d` leave
/// the view untouched.
#[must_use]
pub fn apply_event(view: ViewState, event: InputEvent) -> ViewState {
    match event {
        InputEvent::Click { x, y } => {
            // Recentres relative to the already-offset coordinate, then zooms.
            // Subtracts the pan a second time, so this differs from the
            // browser viewer's `x / mag - pan` unless pan is zero.
            let clicked = to_complex(x, y, &view);

            ViewState {
                pan_x: bounded_pan(clicked.real - view.pan_x),
                pan_y: bounded_pan(clicked.imag - view.pan_y),
                magnification: zoomed_in(view.magnification),
                ..view
            }
        }
        InputEvent::Wheel(WheelDirection::Up) | InputEvent::Button(Button::ZoomIn) => ViewState {
            magnification: zoomed_in(view.magnification),
            ..view
        },
        InputEvent::Wheel(WheelDirection::Down) | InputEvent::Button(Button::ZoomOut) => {
            ViewState {
                magnification: zoomed_out(view.magnification),
                ..view
            }
        }
        InputEvent::Button(Button::Pan(direction)) => {
            let (dx, dy) = direction.offset();
            panned(view, dx, dy)
        }
        InputEvent::Button(Button::Reset) => {
            let mut next = view;
            next.reset_view();
            next
        }
        InputEvent::Button(Button::Transform) => ViewState {
            exponent: view.exponent + TRANSFORM_EXPONENT_STEP,
            rotation_degrees: view.rotation_degrees + TRANSFORM_ROTATION_STEP_DEGREES,
            ..view
        },
        InputEvent::Key(key) => match key_offset(key, view.move_speed) {
            Some((dx, dy)) => panned(view, dx, dy),
            None => view,
        },
        InputEvent::SelectPalette(palette) => ViewState { palette, ..view },
    }
}

/// Owns the single mutable [`ViewState`] of a viewer session.
///
/// Transitions never render on their own; the host calls [`render`](Self::render)
/// after every event that changed the view.
#[derive(Debug, Clone, Default)]
pub struct InteractiveController {
    view: ViewState,
}

impl InteractiveController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Applies `event` and reports whether the view changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let next = apply_event(self.view, event);
        let changed = next != self.view;

        if changed {
            debug!(
                "{:?}: magnification {} -> {}, pan ({}, {}) -> ({}, {}), exponent {}, rotation {}, palette {}",
                event,
                self.view.magnification,
                next.magnification,
                self.view.pan_x,
                self.view.pan_y,
                next.pan_x,
                next.pan_y,
                next.exponent,
                next.rotation_degrees,
                next.palette
            );
        }

        self.view = next;
        changed
    }

    /// Palette selection from a host-supplied name.
    pub fn select_palette_by_name(&mut self, name: &str) -> Result<bool, ConfigurationError> {
        let palette = name.parse::<Palette>().inspect_err(|err| {
            warn!("rejected palette selection: {}", err);
        })?;

        Ok(self.handle(InputEvent::SelectPalette(palette)))
    }

    /// Renders the current view for a `surface_width` x `surface_height` surface.
    pub fn render(
        &self,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<FrameData, RenderFrameError> {
        let start = Instant::now();
        let pixel_buffer = render_frame(&self.view, surface_width, surface_height)?;

        Ok(FrameData {
            pixel_buffer,
            render_duration: start.elapsed(),
        })
    }
}
