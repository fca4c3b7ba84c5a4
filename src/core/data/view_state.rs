use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;
use crate::core::fractals::multibrot::multibrot_config::{
    DEFAULT_EXPONENT, DEFAULT_MAGNIFICATION, DEFAULT_MOVE_SPEED, DEFAULT_PAN_X, DEFAULT_PAN_Y,
    DEFAULT_ROTATION_DEGREES,
};

/// Everything that determines what the viewer shows.
///
/// `magnification` is kept strictly positive and finite by the interaction
/// controller; every other field is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub magnification: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub exponent: f64,
    pub rotation_degrees: f64,
    pub palette: Palette,
    pub move_speed: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            magnification: DEFAULT_MAGNIFICATION,
            pan_x: DEFAULT_PAN_X,
            pan_y: DEFAULT_PAN_Y,
            exponent: DEFAULT_EXPONENT,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            palette: Palette::default(),
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}

impl ViewState {
    /// Restores magnification and pan only.
    pub fn reset_view(&mut self) {
        self.magnification = DEFAULT_MAGNIFICATION;
        self.pan_x = DEFAULT_PAN_X;
        self.pan_y = DEFAULT_PAN_Y;
    }
}
