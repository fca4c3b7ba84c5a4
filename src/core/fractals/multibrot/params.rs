use crate::core::data::view_state::ViewState;
use crate::core::fractals::multibrot::errors::MultibrotError;
use crate::core::fractals::multibrot::multibrot_config::MAX_ITERATIONS;

/// Evaluator configuration derived from a view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MultibrotParams {
    exponent: f64,
    rotation_degrees: f64,
    max_iterations: u32,
}

impl MultibrotParams {
    pub fn new(
        exponent: f64,
        rotation_degrees: f64,
        max_iterations: u32,
    ) -> Result<Self, MultibrotError> {
        if max_iterations == 0 {
            return Err(MultibrotError::ZeroMaxIterations);
        }

        Ok(Self {
            exponent,
            rotation_degrees,
            max_iterations,
        })
    }

    /// Parameters for rendering `view` with the shared iteration budget.
    pub fn from_view(view: &ViewState) -> Result<Self, MultibrotError> {
        Self::new(view.exponent, view.rotation_degrees, MAX_ITERATIONS)
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            MultibrotParams::new(2.0, 0.0, 0),
            Err(MultibrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_from_view_uses_shared_max_iterations() {
        let view = ViewState {
            exponent: 5.0,
            rotation_degrees: 45.0,
            ..ViewState::default()
        };

        let params = MultibrotParams::from_view(&view).unwrap();

        assert_eq!(params.exponent(), 5.0);
        assert_eq!(params.rotation_degrees(), 45.0);
        assert_eq!(params.max_iterations(), MAX_ITERATIONS);
    }
}
