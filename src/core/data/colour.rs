#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
    };

    #[must_use]
    pub fn to_rgb(&self) -> Colour {
        let hue = self.hue.rem_euclid(360.0);
        let saturation = (self.saturation / 100.0).clamp(0.0, 1.0);
        let lightness = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = match hue {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let to_byte = |channel: f64| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Colour {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}
