use crate::spectrum::StftConfig;

/// Default floor on the complex magnitude used to normalize phase.
pub const DEFAULT_EPS: f32 = 1e-11;

/// Peak scale of the random noise the running state is seeded with.
pub const SEED_AMPLITUDE: f32 = 1e-9;

/// Configuration for a streaming spectrogram inverter.
///
/// # Example
/// ```
/// use rtsi::RtsiConfig;
///
/// let config = RtsiConfig::new(1024, 256).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.overlap_ratio(), 4);
/// assert_eq!(config.n_freq(), 513);
///
/// // 1000 is not a multiple of 256
/// assert!(RtsiConfig::new(1000, 256).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RtsiConfig {
    /// Frame length in samples; also the FFT size.
    pub win_length: usize,
    /// Samples emitted per processed frame. Must divide `win_length`.
    pub hop_length: usize,
    /// Strictly positive floor on the complex magnitude before the phase
    /// divide.
    pub eps: f32,
    /// Seed for the noise that initializes (and reinitializes) the running
    /// state. `None` draws a seed from the operating system.
    pub seed: Option<u64>,
    /// The running state is reseeded when no sample exceeds this magnitude.
    /// `0.0` only reseeds an exactly all-zero buffer.
    pub reseed_threshold: f32,
    /// Estimate phase from the unweighted running state whenever the
    /// correction-weighted estimate is at or below `reseed_threshold`.
    ///
    /// With `win_length == 2 * hop_length` the correction window and the
    /// shifted state never overlap, so the weighted estimate is always zero
    /// and the output stays at the level of the seed noise. Off by default.
    pub raw_state_fallback: bool,
}

impl Default for RtsiConfig {
    fn default() -> Self {
        Self {
            win_length: 1024,
            hop_length: 256,
            eps: DEFAULT_EPS,
            seed: None,
            reseed_threshold: f32::MIN_POSITIVE,
            raw_state_fallback: false,
        }
    }
}

impl RtsiConfig {
    /// Configuration with the given lengths and default tuning.
    pub fn new(win_length: usize, hop_length: usize) -> Self {
        Self {
            win_length,
            hop_length,
            ..Self::default()
        }
    }

    pub fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reseed_threshold(mut self, threshold: f32) -> Self {
        self.reseed_threshold = threshold;
        self
    }

    pub fn with_raw_state_fallback(mut self, enabled: bool) -> Self {
        self.raw_state_fallback = enabled;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    /// Returns an error if a length is zero, if `win_length` is not an exact
    /// multiple of `hop_length`, if `eps` is not a positive finite number, or
    /// if `reseed_threshold` is negative or non-finite.
    pub fn validate(&self) -> crate::Result<()> {
        if self.win_length == 0 {
            return Err(crate::Error::InvalidSize {
                name: "win_length",
                value: 0,
                reason: "must be > 0",
            });
        }
        if self.hop_length == 0 {
            return Err(crate::Error::InvalidSize {
                name: "hop_length",
                value: 0,
                reason: "must be > 0",
            });
        }
        if self.win_length % self.hop_length != 0 {
            return Err(crate::Error::InvalidParameter {
                name: "win_length",
                value: self.win_length.to_string(),
                reason: format!(
                    "must be an integer multiple of hop_length {}",
                    self.hop_length
                ),
            });
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(crate::Error::InvalidParameter {
                name: "eps",
                value: self.eps.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !self.reseed_threshold.is_finite() || self.reseed_threshold < 0.0 {
            return Err(crate::Error::InvalidParameter {
                name: "reseed_threshold",
                value: self.reseed_threshold.to_string(),
                reason: "must be a non-negative finite number".to_string(),
            });
        }
        Ok(())
    }

    /// Number of frames overlapping any one sample, `win_length / hop_length`.
    pub fn overlap_ratio(&self) -> usize {
        if self.hop_length == 0 {
            return 0;
        }
        self.win_length / self.hop_length
    }

    /// Number of bins in a one-sided magnitude frame.
    pub fn n_freq(&self) -> usize {
        self.win_length / 2 + 1
    }

    /// Analysis settings whose magnitude frames this inverter consumes:
    /// uncentered periodic-Hann STFT with `n_fft == win_length`.
    pub fn stft_config(&self) -> StftConfig {
        StftConfig::uncentered(self.win_length, self.hop_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RtsiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.eps, 1e-11);
        assert_eq!(config.overlap_ratio(), 4);
        assert!(!config.raw_state_fallback);
    }

    #[test]
    fn test_divisibility_is_not_rounded() {
        let err = RtsiConfig::new(10, 4).validate().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidParameter {
                name: "win_length",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_lengths() {
        assert!(RtsiConfig::new(0, 4).validate().is_err());
        assert!(RtsiConfig::new(8, 0).validate().is_err());
        assert_eq!(RtsiConfig::new(8, 0).overlap_ratio(), 0);
    }

    #[test]
    fn test_eps_must_be_positive() {
        let base = RtsiConfig::new(8, 4);
        assert!(base.clone().with_eps(0.0).validate().is_err());
        assert!(base.clone().with_eps(-1e-6).validate().is_err());
        assert!(base.clone().with_eps(f32::NAN).validate().is_err());
        assert!(base.with_eps(1e-3).validate().is_ok());
    }

    #[test]
    fn test_reseed_threshold_bounds() {
        let base = RtsiConfig::new(8, 4);
        assert!(base.clone().with_reseed_threshold(0.0).validate().is_ok());
        assert!(base.clone().with_reseed_threshold(-1.0).validate().is_err());
        assert!(base.with_reseed_threshold(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_odd_window_is_accepted() {
        let config = RtsiConfig::new(9, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.n_freq(), 5);
        assert_eq!(config.overlap_ratio(), 3);
    }

    #[test]
    fn test_stft_config_matches_lengths() {
        let stft = RtsiConfig::new(16, 4).stft_config();
        assert_eq!(stft.n_fft, 16);
        assert_eq!(stft.hop_length, 4);
        assert_eq!(stft.window.len(), 16);
    }
}
