use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} surface",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps raster coordinates to the complex plane: `(x / magnification - pan_x, y / magnification - pan_y)`.
#[must_use]
pub fn to_complex(pixel_x: f64, pixel_y: f64, view: &ViewState) -> Complex {
    Complex {
        real: pixel_x / view.magnification - view.pan_x,
        imag: pixel_y / view.magnification - view.pan_y,
    }
}

/// Inverse of [`to_complex`].
#[must_use]
pub fn to_pixel(c: Complex, view: &ViewState) -> (f64, f64) {
    (
        (c.real + view.pan_x) * view.magnification,
        (c.imag + view.pan_y) * view.magnification,
    )
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    view: &ViewState,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    Ok(to_complex(
        pixel_position.x as f64,
        pixel_position.y as f64,
        view,
    ))
}
