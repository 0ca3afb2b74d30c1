/// Pad or trim an array to exactly the specified length.
/// Padding is added to the right, trimming is done from the right.
pub fn fix_length<T: Clone>(data: &[T], length: usize, fill_value: T) -> Vec<T> {
    if data.len() >= length {
        data[..length].to_vec()
    } else {
        let mut result = data.to_vec();
        result.resize(length, fill_value);
        result
    }
}

/// Compute the number of frames that fit in a signal of given length.
pub fn frame_count(length: usize, frame_length: usize, hop_length: usize) -> usize {
    if frame_length > length || hop_length == 0 {
        return 0;
    }
    1 + (length - frame_length) / hop_length
}

/// Right-pad audio with zeros so its length is a multiple of `hop_length`.
///
/// Audio that is already a multiple (including empty audio) is returned
/// unchanged.
///
/// # Errors
/// Returns an error if `hop_length` is zero.
///
/// # Example
/// ```
/// use rtsi::utils::pad_for_hop_length;
///
/// let padded = pad_for_hop_length(&[1.0, 2.0, 3.0, 4.0, 5.0], 4).unwrap();
/// assert_eq!(padded, vec![1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 0.0, 0.0]);
/// ```
pub fn pad_for_hop_length(audio: &[f32], hop_length: usize) -> crate::Result<Vec<f32>> {
    if hop_length == 0 {
        return Err(crate::Error::InvalidSize {
            name: "hop_length",
            value: 0,
            reason: "must be > 0",
        });
    }
    let remainder = audio.len() % hop_length;
    if remainder == 0 {
        return Ok(audio.to_vec());
    }
    Ok(fix_length(audio, audio.len() + hop_length - remainder, 0.0))
}

/// Right-pad audio so that analysis followed by streaming inversion returns
/// exactly as many samples as the hop-padded input.
///
/// The audio is first padded to a multiple of `hop_length`, then
/// `win_length - hop_length` more zeros are appended. An uncentered STFT of
/// the result has `len / hop_length` frames, and the inverter emits
/// `hop_length` samples per frame.
///
/// # Errors
/// Returns an error if `hop_length` is zero or larger than `win_length`.
pub fn pad_for_shape_preserving_inverse(
    audio: &[f32],
    win_length: usize,
    hop_length: usize,
) -> crate::Result<Vec<f32>> {
    if hop_length > win_length {
        return Err(crate::Error::InvalidParameter {
            name: "hop_length",
            value: hop_length.to_string(),
            reason: format!("must not exceed win_length {win_length}"),
        });
    }
    let padded = pad_for_hop_length(audio, hop_length)?;
    let target = padded.len() + win_length - hop_length;
    Ok(fix_length(&padded, target, 0.0))
}
