//! Defaults and fixed constants for the multibrot viewer.

/// Shared by the escape-time evaluator and the colour mapper.
pub const MAX_ITERATIONS: u32 = 100;

/// `|z|^2` above this means the orbit escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub const DEFAULT_MAGNIFICATION: f64 = 200.0;
pub const DEFAULT_PAN_X: f64 = 2.0;
pub const DEFAULT_PAN_Y: f64 = 1.0;
pub const DEFAULT_EXPONENT: f64 = 2.0;
pub const DEFAULT_ROTATION_DEGREES: f64 = 0.0;
pub const DEFAULT_MOVE_SPEED: f64 = 0.1;

pub const ZOOM_FACTOR: f64 = 1.6;
pub const PAN_BUTTON_STEP: f64 = 50.0;
pub const TRANSFORM_EXPONENT_STEP: f64 = 1.0;
pub const TRANSFORM_ROTATION_STEP_DEGREES: f64 = 15.0;

/// Magnification and pan bounds. Any pixel coordinate of a valid surface
/// (at most `i32::MAX`) divided by `MIN_MAGNIFICATION`, minus a pan within
/// `MAX_PAN`, stays finite, so the evaluator only ever sees finite points.
pub const MIN_MAGNIFICATION: f64 = 1e-290;
pub const MAX_MAGNIFICATION: f64 = f64::MAX;
pub const MAX_PAN: f64 = 1e300;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT_PATH: &str = "output/multibrot.ppm";
