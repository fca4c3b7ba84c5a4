//! Frame renderer: walks every pixel of the surface through the view
//! transform, the escape-time evaluator and the colour mapper.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::view_state::ViewState;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use crate::core::fractals::multibrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::multibrot::colour_mapping::map::MultibrotColourMap;
use crate::core::fractals::multibrot::errors::MultibrotError;
use crate::core::fractals::multibrot::params::MultibrotParams;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    Surface(PixelRectError),
    Parameters(MultibrotError),
    ViewTransform(PixelToComplexCoordsError),
    Colouring(GeneratePixelBufferError<ColourMapError>),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "invalid surface: {}", err),
            Self::Parameters(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::ViewTransform(err) => write!(f, "view transform failed: {}", err),
            Self::Colouring(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Parameters(err) => Some(err),
            Self::ViewTransform(err) => Some(err),
            Self::Colouring(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for RenderFrameError {
    fn from(err: PixelRectError) -> Self {
        Self::Surface(err)
    }
}

impl From<MultibrotError> for RenderFrameError {
    fn from(err: MultibrotError) -> Self {
        Self::Parameters(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderFrameError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::ViewTransform(err)
    }
}

impl From<GeneratePixelBufferError<ColourMapError>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<ColourMapError>) -> Self {
        Self::Colouring(err)
    }
}

fn build_pipeline(
    view: &ViewState,
    pixel_rect: PixelRect,
) -> Result<(MultibrotAlgorithm, MultibrotColourMap), MultibrotError> {
    let params = MultibrotParams::from_view(view)?;
    let colour_map = MultibrotColourMap::new(view.palette, params.max_iterations());

    Ok((MultibrotAlgorithm::new(pixel_rect, *view, params), colour_map))
}

/// Renders a full frame, evaluating rows in parallel.
pub fn render_frame(
    view: &ViewState,
    surface_width: u32,
    surface_height: u32,
) -> Result<PixelBuffer, RenderFrameError> {
    let pixel_rect = PixelRect::new(surface_width, surface_height)?;
    let (algorithm, colour_map) = build_pipeline(view, pixel_rect)?;

    let start = Instant::now();
    let iterations = generate_fractal_rayon(pixel_rect, &algorithm)?;
    let pixel_buffer = generate_pixel_buffer(iterations, &colour_map, pixel_rect)?;

    log::debug!(
        "rendered {}x{} {} frame in {:?}",
        surface_width,
        surface_height,
        colour_map.display_name(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

/// Same output as [`render_frame`], computed on the calling thread.
pub fn render_frame_sequential(
    view: &ViewState,
    surface_width: u32,
    surface_height: u32,
) -> Result<PixelBuffer, RenderFrameError> {
    let pixel_rect = PixelRect::new(surface_width, surface_height)?;
    let (algorithm, colour_map) = build_pipeline(view, pixel_rect)?;

    let iterations = generate_fractal(pixel_rect, &algorithm)?;

    Ok(generate_pixel_buffer(iterations, &colour_map, pixel_rect)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;

    #[test]
    fn test_default_view_on_800_by_600_surface() {
        let frame = render_frame(&ViewState::default(), 800, 600).unwrap();

        assert_eq!(frame.pixel_rect(), PixelRect::new(800, 600).unwrap());
        // (400 / 200 - 2, 200 / 200 - 1) is the origin
        assert_eq!(frame.pixel(Point { x: 400, y: 200 }), Ok(Colour::BLACK));
        // (799 / 200 - 2, 599 / 200 - 1) lies well outside radius 2
        assert_ne!(frame.pixel(Point { x: 799, y: 599 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let view = ViewState {
            exponent: 3.0,
            rotation_degrees: 15.0,
            palette: Palette::Ocean,
            ..ViewState::default()
        };

        let parallel = render_frame(&view, 64, 48).unwrap();
        let sequential = render_frame_sequential(&view, 64, 48).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_palette_change_recolours_frame() {
        let view = ViewState::default();
        let fire = ViewState {
            palette: Palette::Fire,
            ..view
        };

        let default_frame = render_frame(&view, 32, 32).unwrap();
        let fire_frame = render_frame(&fire, 32, 32).unwrap();

        assert_ne!(default_frame.buffer(), fire_frame.buffer());
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        assert_eq!(
            render_frame(&ViewState::default(), 0, 600),
            Err(RenderFrameError::Surface(PixelRectError::InvalidSize {
                width: 0,
                height: 600
            }))
        );
    }
}
