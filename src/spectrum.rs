use crate::fft::FftPlan;
use crate::window;
use ndarray::Array2;
use num_complex::Complex32;

/// Left-aligned STFT analysis parameters.
///
/// Frames start at multiples of `hop_length` with no centering pad, and the
/// analysis window spans the whole FFT.
#[derive(Debug, Clone)]
pub struct StftConfig {
    pub n_fft: usize,
    pub hop_length: usize,
    pub window: Vec<f32>,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self::uncentered(1024, 256)
    }
}

impl StftConfig {
    /// Periodic Hann analysis with `n_fft == win_length`.
    ///
    /// This is the analysis layout the streaming inverter expects its
    /// magnitude frames to come from.
    pub fn uncentered(win_length: usize, hop_length: usize) -> Self {
        Self {
            n_fft: win_length,
            hop_length,
            window: window::hann(win_length),
        }
    }
}

#[inline]
fn compute_frame(
    frame: usize,
    y: &[f32],
    window: &[f32],
    fft: &FftPlan,
    hop_length: usize,
    n_fft: usize,
    n_freq: usize,
) -> Vec<Complex32> {
    let start = frame * hop_length;
    let mut buffer = vec![Complex32::new(0.0, 0.0); n_fft];
    for ((bin, &sample), &w) in buffer.iter_mut().zip(&y[start..start + n_fft]).zip(window) {
        bin.re = sample * w;
    }
    fft.forward(&mut buffer);
    buffer.truncate(n_freq);
    buffer
}

/// Compute the Short-Time Fourier Transform (STFT).
///
/// # Arguments
/// * `y` - Input audio signal
/// * `config` - STFT configuration (FFT size, hop length, window, etc.)
///
/// # Returns
/// Complex STFT matrix of shape (n_freq, n_frames) where n_freq = n_fft/2 + 1.
/// Only frames that fit entirely inside `y` are produced.
///
/// # Errors
/// Returns an error if the audio is invalid, if n_fft/hop_length is zero, or
/// if the window length differs from n_fft.
pub fn stft(y: &[f32], config: &StftConfig) -> crate::Result<Array2<Complex32>> {
    crate::utils::valid_audio(y)?;
    if config.n_fft == 0 {
        return Err(crate::Error::InvalidSize {
            name: "n_fft",
            value: 0,
            reason: "must be > 0",
        });
    }
    if config.hop_length == 0 {
        return Err(crate::Error::InvalidSize {
            name: "hop_length",
            value: 0,
            reason: "must be > 0",
        });
    }
    if config.window.len() != config.n_fft {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("window of {} samples", config.n_fft),
            got: format!("{} samples", config.window.len()),
        });
    }

    let window = &config.window;
    let n_frames = crate::utils::frame_count(y.len(), config.n_fft, config.hop_length);

    let n_freq = config.n_fft / 2 + 1;
    let fft = FftPlan::new(config.n_fft);

    let frame_results: Vec<Vec<Complex32>> = {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n_frames)
                .into_par_iter()
                .map(|frame| {
                    compute_frame(
                        frame,
                        y,
                        window,
                        &fft,
                        config.hop_length,
                        config.n_fft,
                        n_freq,
                    )
                })
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..n_frames)
                .map(|frame| {
                    compute_frame(
                        frame,
                        y,
                        window,
                        &fft,
                        config.hop_length,
                        config.n_fft,
                        n_freq,
                    )
                })
                .collect()
        }
    };

    let mut stft_matrix = Array2::<Complex32>::zeros((n_freq, n_frames));
    for (frame, result) in frame_results.iter().enumerate() {
        for (f, &val) in result.iter().enumerate() {
            stft_matrix[(f, frame)] = val;
        }
    }

    Ok(stft_matrix)
}

/// Elementwise magnitude of a complex STFT matrix.
pub fn magnitude(stft_matrix: &Array2<Complex32>) -> Array2<f32> {
    stft_matrix.mapv(|v| v.norm())
}
