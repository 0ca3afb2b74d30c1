use super::{RtsiConfig, RunningState, WindowSet};
use crate::fft::RealFftPlan;
use num_complex::Complex32;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Streaming single-pass spectrogram inverter.
///
/// Each call to [`Rtsi::process`] consumes one magnitude frame and emits
/// one hop of audio. Phase is estimated from the audio already emitted, so
/// frames must be fed in order and are visited only once.
///
/// An engine owns all of its state; separate streams need separate engines,
/// which can run on separate threads without synchronization.
///
/// # Example
/// ```
/// use rtsi::{Rtsi, RtsiConfig};
///
/// let mut engine = Rtsi::new(RtsiConfig::new(8, 4).with_seed(0)).unwrap();
/// let hop = engine.process(&[1.0; 5]).unwrap();
/// assert_eq!(hop.len(), 4);
/// ```
pub struct Rtsi {
    config: RtsiConfig,
    windows: WindowSet,
    state: RunningState,
    plan: RealFftPlan,
    rng: StdRng,
    segment: Vec<f32>,
    spectrum: Vec<Complex32>,
    scratch: Vec<Complex32>,
    frames_processed: u64,
    reseed_count: u64,
}

const _: () = {
    fn _assert_send<T: Send>() {}
    fn _check() {
        _assert_send::<Rtsi>();
    }
};

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Rtsi {
    /// Build an engine from a configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid; in particular when
    /// `win_length` is not an exact multiple of `hop_length`.
    pub fn new(config: RtsiConfig) -> crate::Result<Self> {
        let windows = WindowSet::new(&config)?;
        let mut rng = make_rng(config.seed);
        let state = RunningState::seeded(windows.asym_window(), config.hop_length, &mut rng);
        let plan = RealFftPlan::new(config.win_length);

        match config.overlap_ratio() {
            1 => log::warn!(
                "win_length {} equals hop_length: no past frame overlaps, output will be silent",
                config.win_length
            ),
            2 if !config.raw_state_fallback => log::warn!(
                "win_length {} is twice hop_length: output stays at seed level \
                 unless raw_state_fallback is enabled",
                config.win_length
            ),
            _ => {}
        }
        log::debug!(
            "rtsi engine: win_length={} hop_length={} overlap={} div_factor={}",
            config.win_length,
            config.hop_length,
            config.overlap_ratio(),
            windows.div_factor()
        );

        Ok(Self {
            segment: vec![0.0; config.win_length],
            spectrum: plan.make_spectrum(),
            scratch: plan.make_scratch(),
            config,
            windows,
            state,
            plan,
            rng,
            frames_processed: 0,
            reseed_count: 0,
        })
    }

    /// Build an engine with default tuning for the given lengths.
    pub fn with_lengths(win_length: usize, hop_length: usize) -> crate::Result<Self> {
        Self::new(RtsiConfig::new(win_length, hop_length))
    }

    /// Reconstruct one hop of audio from one magnitude frame.
    ///
    /// # Arguments
    /// * `frame` - One-sided magnitude spectrum of `win_length / 2 + 1` bins
    ///
    /// # Returns
    /// `hop_length` samples of audio
    ///
    /// # Errors
    /// Returns an error if the frame has the wrong number of bins or holds
    /// negative or non-finite values. The running state is untouched then.
    pub fn process(&mut self, frame: &[f32]) -> crate::Result<Vec<f32>> {
        let mut out = vec![0.0f32; self.config.hop_length];
        self.process_into(frame, &mut out)?;
        Ok(out)
    }

    /// Like [`Rtsi::process`], writing the hop into `out` without allocating.
    ///
    /// # Errors
    /// Returns an error if `frame` is malformed or `out` is not exactly
    /// `hop_length` samples long.
    pub fn process_into(&mut self, frame: &[f32], out: &mut [f32]) -> crate::Result<()> {
        crate::utils::valid_magnitude_frame(frame, self.config.n_freq())?;
        if out.len() != self.config.hop_length {
            return Err(crate::Error::ShapeMismatch {
                expected: format!("{} output samples", self.config.hop_length),
                got: format!("{} output samples", out.len()),
            });
        }

        let threshold = self.config.reseed_threshold;

        // phase estimate from the corrected running window
        self.state
            .weighted_into(self.windows.asym_window(), &mut self.segment);
        if self.config.raw_state_fallback && crate::utils::max_abs(&self.segment) <= threshold {
            if self.state.is_degenerate(threshold) {
                self.reseed();
            }
            self.segment.copy_from_slice(self.state.as_slice());
        }
        self.plan
            .forward(&mut self.segment, &mut self.spectrum, &mut self.scratch)?;

        let eps = self.config.eps;
        for (bin, &magnitude) in self.spectrum.iter_mut().zip(frame) {
            let norm = bin.norm().max(eps);
            *bin = (*bin / norm) * magnitude;
        }

        self.plan
            .inverse(&mut self.spectrum, &mut self.segment, &mut self.scratch)?;
        self.state.overlap_add(&self.segment, self.windows.window());

        if self.state.is_degenerate(threshold) {
            self.reseed();
        }

        self.state.emit_into(self.windows.div_factor(), out);
        self.state.shift();
        self.frames_processed += 1;
        Ok(())
    }

    fn reseed(&mut self) {
        log::debug!(
            "running state collapsed at frame {}, reseeding",
            self.frames_processed
        );
        self.state.reseed(self.windows.asym_window(), &mut self.rng);
        self.reseed_count += 1;
    }

    /// Start a new stream: reseed the running state and clear the counters.
    ///
    /// With a fixed seed the engine behaves exactly like a freshly built one.
    pub fn reset(&mut self) {
        self.rng = make_rng(self.config.seed);
        self.state
            .reseed(self.windows.asym_window(), &mut self.rng);
        self.frames_processed = 0;
        self.reseed_count = 0;
    }

    pub fn config(&self) -> &RtsiConfig {
        &self.config
    }

    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    /// Current running state, as it will be read by the next frame.
    pub fn state(&self) -> &RunningState {
        &self.state
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// How many times the running state collapsed and was reseeded.
    pub fn reseed_count(&self) -> u64 {
        self.reseed_count
    }
}
