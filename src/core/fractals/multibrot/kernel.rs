//! Complex math kernel for the generalised Mandelbrot recurrence.

use crate::core::data::complex::Complex;

/// Rotates `z` about the origin by `angle_degrees`.
#[must_use]
pub fn rotate(z: Complex, angle_degrees: f64) -> Complex {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    Complex {
        real: z.real * cos - z.imag * sin,
        imag: z.real * sin + z.imag * cos,
    }
}

/// One step of `z <- rotate(z)^exponent + c`, with the power taken in polar form
/// so that any real exponent works.
#[must_use]
pub fn multibrot_step(z: Complex, c: Complex, exponent: f64, rotation_degrees: f64) -> Complex {
    let rotated = rotate(z, rotation_degrees);
    let radius = rotated.magnitude_squared().powf(exponent / 2.0);

    Complex::from_polar(radius, exponent * rotated.argument()) + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn square(z: Complex) -> Complex {
        Complex::new(z.real * z.real - z.imag * z.imag, 2.0 * z.real * z.imag)
    }

    fn cube(z: Complex) -> Complex {
        let z2 = square(z);
        Complex::new(
            z2.real * z.real - z2.imag * z.imag,
            z2.real * z.imag + z2.imag * z.real,
        )
    }

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < EPSILON
                && (actual.imag - expected.imag).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rotate_by_zero_is_identity() {
        let z = Complex::new(1.5, -0.25);
        assert_close(rotate(z, 0.0), z);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        assert_close(rotate(Complex::new(1.0, 0.0), 90.0), Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let z = Complex::new(0.3, 0.7);
        assert_close(rotate(z, 360.0), z);
        assert_close(rotate(z, 720.0), z);
    }

    #[test]
    fn test_step_with_exponent_two_matches_square_plus_c() {
        let z = Complex::new(0.5, -1.25);
        let c = Complex::new(-0.75, 0.1);

        assert_close(multibrot_step(z, c, 2.0, 0.0), square(z) + c);
    }

    #[test]
    fn test_step_with_exponent_three_matches_cube_plus_c() {
        let z = Complex::new(0.4, 0.3);
        let c = Complex::new(0.2, -0.2);

        assert_close(multibrot_step(z, c, 3.0, 0.0), cube(z) + c);
    }

    #[test]
    fn test_step_at_origin_returns_c() {
        let c = Complex::new(-1.0, 0.5);

        let result = multibrot_step(Complex::ZERO, c, 2.0, 45.0);

        assert!(result.is_finite());
        assert_close(result, c);
    }

    #[test]
    fn test_step_applies_rotation_before_power() {
        let z = Complex::new(1.0, 0.0);
        let rotated = Complex::new(0.0, 1.0);

        assert_close(
            multibrot_step(z, Complex::ZERO, 2.0, 90.0),
            square(rotated),
        );
    }
}
