use super::config::SEED_AMPLITUDE;
use rand::Rng;
use rand_distr::StandardNormal;

/// The window of audio currently under construction.
///
/// Holds the overlap-added contributions of every past frame that still
/// overlaps the current one. Its length never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningState {
    buffer: Vec<f32>,
    hop_length: usize,
}

impl RunningState {
    /// Create a state seeded with shaped noise.
    ///
    /// `asym_window` fixes the length; see [`RunningState::reseed`].
    pub fn seeded<R: Rng + ?Sized>(asym_window: &[f32], hop_length: usize, rng: &mut R) -> Self {
        let mut state = Self {
            buffer: vec![0.0; asym_window.len()],
            hop_length,
        };
        state.reseed(asym_window, rng);
        state
    }

    /// Overwrite the buffer with Gaussian noise of scale `1e-9`, shaped by
    /// the correction window reversed in time.
    ///
    /// The reversed correction window is largest on the left, where past
    /// frames would have left energy, and zero on the last hop.
    pub fn reseed<R: Rng + ?Sized>(&mut self, asym_window: &[f32], rng: &mut R) {
        for (sample, &w) in self.buffer.iter_mut().zip(asym_window.iter().rev()) {
            let noise: f32 = rng.sample(StandardNormal);
            *sample = noise * SEED_AMPLITUDE * w;
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// True when no sample's magnitude exceeds `threshold`.
    pub fn is_degenerate(&self, threshold: f32) -> bool {
        crate::utils::max_abs(&self.buffer) <= threshold
    }

    /// Write `state * weights` into `out`.
    pub(super) fn weighted_into(&self, weights: &[f32], out: &mut [f32]) {
        for ((dst, &x), &w) in out.iter_mut().zip(&self.buffer).zip(weights) {
            *dst = x * w;
        }
    }

    /// Accumulate `segment * window` onto the buffer.
    pub(super) fn overlap_add(&mut self, segment: &[f32], window: &[f32]) {
        for ((acc, &s), &w) in self.buffer.iter_mut().zip(segment).zip(window) {
            *acc += s * w;
        }
    }

    /// Write the first hop divided by `div_factor` into `out`.
    pub(super) fn emit_into(&self, div_factor: f32, out: &mut [f32]) {
        for (dst, &x) in out.iter_mut().zip(&self.buffer[..self.hop_length]) {
            *dst = x / div_factor;
        }
    }

    /// Drop the first hop and append a hop of zeros.
    pub(super) fn shift(&mut self) {
        let hop = self.hop_length.min(self.buffer.len());
        self.buffer.copy_within(hop.., 0);
        let tail = self.buffer.len() - hop;
        self.buffer[tail..].fill(0.0);
    }

    #[cfg(test)]
    pub(super) fn set_samples(&mut self, samples: &[f32]) {
        self.buffer.copy_from_slice(samples);
    }
}
