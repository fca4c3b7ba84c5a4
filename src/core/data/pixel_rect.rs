use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "pixel rect {}x{} exceeds the {} pixel coordinate limit",
                    width,
                    height,
                    i32::MAX
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// The display surface in raster coordinates, anchored at (0, 0). Both sides
/// fit in an `i32` so every pixel is addressable as a [`Point`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Every pixel in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width as i32;
        let height = self.height as i32;

        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(800, 600).unwrap();

        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert_eq!(rect.size(), 480_000);
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        assert!(PixelRect::new(1, 1).is_ok());
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_pixel_rect_dimensions_must_fit_point_coordinates() {
        let limit = i32::MAX as u32;

        assert!(PixelRect::new(limit, 1).is_ok());
        assert_eq!(
            PixelRect::new(limit + 1, 10),
            Err(PixelRectError::TooLarge { width: limit + 1, height: 10 })
        );
        assert_eq!(
            PixelRect::new(10, u32::MAX),
            Err(PixelRectError::TooLarge { width: 10, height: u32::MAX })
        );
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 99, y: 49 }));
        assert!(!rect.contains_point(Point { x: 100, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: 50 }));
        assert!(!rect.contains_point(Point { x: -1, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: -1 }));
    }

    #[test]
    fn test_points_are_row_major() {
        let rect = PixelRect::new(3, 2).unwrap();
        let points: Vec<Point> = rect.points().collect();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point { x: 0, y: 0 });
        assert_eq!(points[1], Point { x: 1, y: 0 });
        assert_eq!(points[3], Point { x: 0, y: 1 });
        assert_eq!(points[5], Point { x: 2, y: 1 });
    }
}
