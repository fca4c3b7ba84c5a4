use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;
use crate::core::fractals::multibrot::multibrot_config::PAN_BUTTON_STEP;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Up,
    Right,
    Down,
}

impl PanDirection {
    /// Pixel offset applied by the matching pan button.
    #[must_use]
    pub fn offset(self) -> (f64, f64) {
        match self {
            Self::Left => (-PAN_BUTTON_STEP, 0.0),
            Self::Up => (0.0, -PAN_BUTTON_STEP),
            Self::Right => (PAN_BUTTON_STEP, 0.0),
            Self::Down => (0.0, PAN_BUTTON_STEP),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolled away from the user.
    Up,
    Down,
}

impl WheelDirection {
    /// Only the sign of the host's vertical delta matters. Negative deltas
    /// scroll up; zero and positive scroll down.
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    Reset,
    Transform,
}

/// Everything the host can send to the interaction controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Click { x: f64, y: f64 },
    Wheel(WheelDirection),
    Button(Button),
    Key(char),
    SelectPalette(Palette),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_offsets_have_fixed_magnitude() {
        for direction in [
            PanDirection::Left,
            PanDirection::Up,
            PanDirection::Right,
            PanDirection::Down,
        ] {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 50.0);
        }
    }

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelDirection::from_delta(-3.0), WheelDirection::Up);
        assert_eq!(WheelDirection::from_delta(120.0), WheelDirection::Down);
        assert_eq!(WheelDirection::from_delta(0.0), WheelDirection::Down);
    }
}
