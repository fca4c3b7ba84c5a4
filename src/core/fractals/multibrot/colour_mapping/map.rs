use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, Hsl};
use crate::core::fractals::multibrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;

/// Colour for an escape count. Points that never escaped (`iterations == max_iterations`)
/// are black; everything else goes through the palette's formula over
/// `iterations / max_iterations`.
pub fn colour_for(
    iterations: u32,
    max_iterations: u32,
    palette: Palette,
) -> Result<Hsl, ColourMapError> {
    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    if iterations == max_iterations {
        return Ok(Hsl::BLACK);
    }

    let ratio = iterations as f64 / max_iterations as f64;

    let (hue, lightness) = match palette {
        Palette::Default => (ratio * 360.0, 50.0),
        Palette::Fire => (60.0 + ratio * 60.0, 50.0 + ratio * 50.0),
        Palette::Ocean => (180.0 + ratio * 60.0, 50.0 + ratio * 50.0),
        Palette::Forest => (120.0 + ratio * 60.0, 30.0 + ratio * 40.0),
    };

    Ok(Hsl {
        hue,
        saturation: 100.0,
        lightness,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultibrotColourMap {
    palette: Palette,
    max_iterations: u32,
}

impl ColourMap for MultibrotColourMap {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        colour_for(iterations, self.max_iterations, self.palette).map(|hsl| hsl.to_rgb())
    }

    fn display_name(&self) -> &str {
        self.palette.display_name()
    }
}

impl MultibrotColourMap {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}
