/// Validate audio data for basic sanity.
///
/// # Arguments
/// * `y` - Audio samples to validate
///
/// # Returns
/// `Ok(())` if the audio is non-empty and every sample is finite
///
/// # Example
/// ```
/// use rtsi::utils::valid_audio;
///
/// assert!(valid_audio(&[0.0, 0.5, -0.5]).is_ok());
/// assert!(valid_audio(&[]).is_err());
/// assert!(valid_audio(&[f32::NAN]).is_err());
/// ```
pub fn valid_audio(y: &[f32]) -> crate::Result<()> {
    if y.is_empty() {
        return Err(crate::Error::EmptyAudio);
    }

    if !y.iter().all(|&v| v.is_finite()) {
        return Err(crate::Error::NonFiniteAudio);
    }

    Ok(())
}

/// Validate one magnitude frame against the expected number of bins.
///
/// # Arguments
/// * `frame` - One-sided magnitude spectrum
/// * `n_freq` - Required number of bins
///
/// # Returns
/// `Ok(())` if the frame has exactly `n_freq` finite, non-negative bins
pub fn valid_magnitude_frame(frame: &[f32], n_freq: usize) -> crate::Result<()> {
    if frame.len() != n_freq {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("{n_freq} frequency bins"),
            got: format!("{} frequency bins", frame.len()),
        });
    }

    for (bin, &value) in frame.iter().enumerate() {
        if !value.is_finite() {
            return Err(crate::Error::NonFiniteMagnitude);
        }
        if value < 0.0 {
            return Err(crate::Error::NegativeMagnitude { bin, value });
        }
    }

    Ok(())
}
