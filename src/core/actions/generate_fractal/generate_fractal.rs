use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Computes every pixel of `pixel_rect` on the calling thread, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::convert::Infallible;

    struct CoordinateSum;

    impl FractalAlgorithm for CoordinateSum {
        type Success = i32;
        type Failure = Infallible;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.x + 10 * pixel.y)
        }
    }

    #[test]
    fn test_results_are_row_major() {
        let pixel_rect = PixelRect::new(3, 2).unwrap();

        let results = generate_fractal(pixel_rect, &CoordinateSum).unwrap();

        assert_eq!(results, vec![0, 1, 2, 10, 11, 12]);
    }
}
