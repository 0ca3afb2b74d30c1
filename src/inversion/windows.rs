use super::RtsiConfig;
use crate::window;

/// Immutable windows shared by every frame of a stream.
#[derive(Debug, Clone)]
pub struct WindowSet {
    window: Vec<f32>,
    asym_window: Vec<f32>,
    div_factor: f32,
}

impl WindowSet {
    /// Build the window set for a configuration.
    ///
    /// * synthesis window: symmetric Hann of `win_length`
    /// * correction window: see [`window::asymmetric_window`]
    /// * divisor: mean square of the synthesis window times the overlap ratio
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, or for a two-sample
    /// window, whose symmetric Hann taper is identically zero.
    pub fn new(config: &RtsiConfig) -> crate::Result<Self> {
        config.validate()?;
        let window = window::hann_symmetric(config.win_length);
        let asym_window = window::asymmetric_window(&window, config.hop_length)?;
        let div_factor = window::mean_square(&window) * config.overlap_ratio() as f32;
        if div_factor <= 0.0 {
            return Err(crate::Error::InvalidParameter {
                name: "win_length",
                value: config.win_length.to_string(),
                reason: "a symmetric Hann window of this length is all zeros".to_string(),
            });
        }
        Ok(Self {
            window,
            asym_window,
            div_factor,
        })
    }

    /// Overlap-add taper applied to every reconstructed segment.
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// Weighting applied to the running state before phase estimation.
    pub fn asym_window(&self) -> &[f32] {
        &self.asym_window
    }

    /// Gain accumulated by windowed overlap-add, divided out of the output.
    pub fn div_factor(&self) -> f32 {
        self.div_factor
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
