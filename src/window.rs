/// Compute a periodic Hann (raised cosine) window.
///
/// This is the analysis window used by [`crate::spectrum::stft`], matching
/// `scipy.signal.get_window("hann", n, fftbins=True)`.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Hann window of length `n`
pub fn hann(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = n as f32;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / m).cos())
        .collect()
}

/// Compute a symmetric Hann window.
///
/// Both endpoints are exactly zero and the window is mirror-symmetric,
/// matching `numpy.hanning(n)`. The streaming inverter uses this form
/// for its overlap-add taper.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Symmetric Hann window of length `n`
///
/// # Example
/// ```
/// use rtsi::window::hann_symmetric;
///
/// let w = hann_symmetric(5);
/// assert_eq!(w, vec![0.0, 0.5, 1.0, 0.5, 0.0]);
/// ```
pub fn hann_symmetric(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| (0.5 - 0.5 * (2.0 * std::f64::consts::PI * i as f64 / m).cos()) as f32)
        .collect()
}

/// Build the asymmetric correction window for a causal running buffer.
///
/// A running buffer of `window.len()` samples holds the overlap-added
/// contributions of the `overlap - 1` previous frames, each one hop further
/// to the left, while everything to the right is still silent. The
/// correction window is the sum of the squared analysis window truncated to
/// its first `i * hop_length` samples and right-aligned, for
/// `i in 1..overlap`. It is zero on the leftmost hop and grows toward the
/// right edge.
///
/// # Arguments
/// * `window` - Analysis window (its length is the frame length)
/// * `hop_length` - Hop size in samples; must divide `window.len()`
///
/// # Returns
/// Correction window of the same length as `window`. All zeros when
/// `hop_length >= window.len()` (no past frame overlaps).
///
/// # Errors
/// Returns an error if `hop_length` is zero or does not divide the window length.
///
/// # Example
/// ```
/// use rtsi::window::{asymmetric_window, hann_symmetric};
///
/// let w = hann_symmetric(8);
/// let asym = asymmetric_window(&w, 4).unwrap();
/// assert_eq!(asym.len(), 8);
/// assert!(asym[..4].iter().all(|&v| v == 0.0));
/// ```
pub fn asymmetric_window(window: &[f32], hop_length: usize) -> crate::Result<Vec<f32>> {
    let n = window.len();
    if hop_length == 0 {
        return Err(crate::Error::InvalidSize {
            name: "hop_length",
            value: 0,
            reason: "must be > 0",
        });
    }
    if n % hop_length != 0 {
        return Err(crate::Error::InvalidParameter {
            name: "hop_length",
            value: hop_length.to_string(),
            reason: format!("must divide the window length {n}"),
        });
    }

    let overlap = n / hop_length;
    let mut asym = vec![0.0f32; n];
    for i in 1..overlap {
        let len = i * hop_length;
        let offset = n - len;
        for (dst, &w) in asym[offset..].iter_mut().zip(&window[..len]) {
            *dst += w * w;
        }
    }
    Ok(asym)
}

/// Mean of the squared window samples.
pub fn mean_square(window: &[f32]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|w| w * w).sum::<f32>() / window.len() as f32
}
