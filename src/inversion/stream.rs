use super::{Rtsi, RtsiConfig};
use ndarray::Array2;

/// Zero padding applied to audio before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Analyze the audio as-is; a trailing partial hop is dropped.
    None,
    /// Right-pad to a multiple of `hop_length`.
    #[default]
    HopLength,
    /// Right-pad so that inverting the spectrogram returns exactly the
    /// hop-padded input length.
    ShapePreserving,
}

/// Magnitude spectrogram in the layout the streaming inverter consumes.
///
/// Uncentered STFT with a periodic Hann window and `n_fft == win_length`,
/// magnitude only.
///
/// # Arguments
/// * `audio` - Input signal
/// * `config` - Inverter configuration supplying the frame and hop lengths
/// * `padding` - Zero padding applied before analysis
///
/// # Returns
/// Magnitude matrix of shape (win_length/2 + 1, n_frames)
///
/// # Errors
/// Returns an error if the configuration is invalid or the audio is empty or
/// non-finite.
///
/// # Example
/// ```
/// use rtsi::{RtsiConfig, inversion::{Padding, audio_to_spect}};
///
/// let config = RtsiConfig::new(16, 4);
/// let audio = vec![0.25f32; 30];
/// let spect = audio_to_spect(&audio, &config, Padding::ShapePreserving).unwrap();
/// // 30 -> 32 -> 44 samples, 8 frames
/// assert_eq!(spect.shape(), &[9, 8]);
/// ```
pub fn audio_to_spect(
    audio: &[f32],
    config: &RtsiConfig,
    padding: Padding,
) -> crate::Result<Array2<f32>> {
    config.validate()?;
    crate::utils::valid_audio(audio)?;

    let padded = match padding {
        Padding::None => audio.to_vec(),
        Padding::HopLength => crate::utils::pad_for_hop_length(audio, config.hop_length)?,
        Padding::ShapePreserving => crate::utils::pad_for_shape_preserving_inverse(
            audio,
            config.win_length,
            config.hop_length,
        )?,
    };

    let stft = crate::spectrum::stft(&padded, &config.stft_config())?;
    Ok(crate::spectrum::magnitude(&stft))
}

impl Rtsi {
    /// Analyze audio with this engine's frame and hop lengths.
    ///
    /// See [`audio_to_spect`].
    pub fn audio_to_spect(&self, audio: &[f32], padding: Padding) -> crate::Result<Array2<f32>> {
        audio_to_spect(audio, self.config(), padding)
    }

    /// Invert a whole magnitude spectrogram, frame by frame, in column order.
    ///
    /// The running state carries over from earlier calls, so a long
    /// spectrogram may be fed in consecutive chunks.
    ///
    /// # Arguments
    /// * `spect` - Magnitude spectrogram of shape (win_length/2 + 1, n_frames)
    ///
    /// # Returns
    /// `n_frames * hop_length` samples
    ///
    /// # Errors
    /// Returns an error if the frequency axis has the wrong length or a
    /// frame holds negative or non-finite values. Frames before the bad one
    /// have already been applied to the running state.
    pub fn spect_to_audio(&mut self, spect: &Array2<f32>) -> crate::Result<Vec<f32>> {
        let n_freq = self.config().n_freq();
        let hop = self.config().hop_length;
        if spect.nrows() != n_freq {
            return Err(crate::Error::ShapeMismatch {
                expected: format!("{n_freq} frequency bins"),
                got: format!("{} frequency bins", spect.nrows()),
            });
        }

        let n_frames = spect.ncols();
        log::trace!("inverting {n_frames} frames");

        let mut audio = vec![0.0f32; n_frames * hop];
        let mut frame = vec![0.0f32; n_freq];
        for (column, out) in spect.columns().into_iter().zip(audio.chunks_exact_mut(hop)) {
            for (dst, &v) in frame.iter_mut().zip(column.iter()) {
                *dst = v;
            }
            self.process_into(&frame, out)?;
        }
        Ok(audio)
    }

    /// Invert a sequence of magnitude frames, concatenating the hops.
    ///
    /// # Errors
    /// Stops at the first malformed frame.
    pub fn process_frames<'a, I>(&mut self, frames: I) -> crate::Result<Vec<f32>>
    where
        I: IntoIterator<Item = &'a [f32]>,
    {
        let hop = self.config().hop_length;
        let mut audio = Vec::new();
        for frame in frames {
            let start = audio.len();
            audio.resize(start + hop, 0.0);
            self.process_into(frame, &mut audio[start..])?;
        }
        Ok(audio)
    }
}
