use std::str::FromStr;

use crate::core::fractals::multibrot::colour_mapping::errors::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Default,
    Fire,
    Ocean,
    Forest,
}

impl Palette {
    pub const ALL: &'static [Self] = &[Self::Default, Self::Fire, Self::Ocean, Self::Forest];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for Palette {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|palette| palette.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigurationError::UnknownPalette(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(Palette::ALL.first(), Some(&Palette::default()));
        assert_eq!(Palette::ALL.len(), 4);
    }

    #[test]
    fn parses_every_name_round_trip() {
        for &palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Palette>(), Ok(palette));
            assert_eq!(palette.display_name().parse::<Palette>(), Ok(palette));
        }
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        assert_eq!(
            "sunset".parse::<Palette>(),
            Err(ConfigurationError::UnknownPalette("sunset".to_string()))
        );
        assert!("".parse::<Palette>().is_err());
    }

    #[test]
    fn display_names_are_unique() {
        for (i, a) in Palette::ALL.iter().enumerate() {
            for b in &Palette::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }
}
