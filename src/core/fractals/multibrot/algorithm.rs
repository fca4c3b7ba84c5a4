use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::multibrot::kernel::multibrot_step;
use crate::core::fractals::multibrot::multibrot_config::ESCAPE_RADIUS_SQUARED;
use crate::core::fractals::multibrot::params::MultibrotParams;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time count for `c`: the number of steps taken before `|z| > 2`, or
/// `max_iterations` if the orbit stays bounded. The bound is checked before
/// each step, starting from `z = 0`.
#[must_use]
pub fn evaluate(c: Complex, exponent: f64, rotation_degrees: f64, max_iterations: u32) -> u32 {
    debug_assert!(c.is_finite(), "non-finite point {:?} passed to evaluate", c);

    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = multibrot_step(z, c, exponent, rotation_degrees);
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultibrotAlgorithm {
    pixel_rect: PixelRect,
    view: ViewState,
    params: MultibrotParams,
}

impl FractalAlgorithm for MultibrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, &self.view)?;

        Ok(evaluate(
            c,
            self.params.exponent(),
            self.params.rotation_degrees(),
            self.params.max_iterations(),
        ))
    }
}

impl MultibrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, view: ViewState, params: MultibrotParams) -> Self {
        Self {
            pixel_rect,
            view,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 100;

    #[test]
    fn test_origin_is_in_the_set_for_any_budget() {
        for max in [0, 1, 10, 100, 1000] {
            assert_eq!(evaluate(Complex::ZERO, 2.0, 0.0, max), max);
        }
    }

    #[test]
    fn test_far_point_escapes_after_one_step() {
        assert_eq!(evaluate(Complex::new(3.0, 0.0), 2.0, 0.0, MAX), 1);
    }

    #[test]
    fn test_points_outside_radius_two_escape_on_first_step() {
        for c in [
            Complex::new(2.5, 0.0),
            Complex::new(0.0, -2.1),
            Complex::new(-1.5, 1.5),
            Complex::new(10.0, 10.0),
        ] {
            assert_eq!(evaluate(c, 2.0, 0.0, MAX), 1, "c = {:?}", c);
        }
    }

    #[test]
    fn test_minus_one_is_in_the_mandelbrot_set() {
        assert_eq!(evaluate(Complex::new(-1.0, 0.0), 2.0, 0.0, MAX), MAX);
    }

    #[test]
    fn test_point_near_boundary_escapes_late() {
        let iterations = evaluate(Complex::new(0.3, 0.0), 2.0, 0.0, MAX);

        assert!(iterations > 1 && iterations < MAX, "got {}", iterations);
    }

    #[test]
    fn test_higher_exponent_with_rotation_stays_finite() {
        let iterations = evaluate(Complex::new(0.1, 0.2), 7.0, 105.0, MAX);

        assert!(iterations <= MAX);
    }

    #[test]
    fn test_compute_maps_pixel_through_view() {
        let pixel_rect = PixelRect::new(800, 600).unwrap();
        let view = ViewState::default();
        let algorithm =
            MultibrotAlgorithm::new(pixel_rect, view, MultibrotParams::from_view(&view).unwrap());

        // (400 / 200 - 2, 200 / 200 - 1) is the origin
        assert_eq!(algorithm.compute(Point { x: 400, y: 200 }), Ok(MAX));
        assert!(algorithm.compute(Point { x: 800, y: 0 }).is_err());
    }
}
