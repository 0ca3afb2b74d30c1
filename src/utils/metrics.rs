use ndarray::Array2;

/// Mean squared error over the overlapping prefix of two signals.
pub fn mse(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let n = a.len().min(b.len());
    let acc: f32 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    acc / n as f32
}

/// Root mean square of a signal. Zero for an empty slice.
pub fn rms(y: &[f32]) -> f32 {
    if y.is_empty() {
        return 0.0;
    }
    (y.iter().map(|v| v * v).sum::<f32>() / y.len() as f32).sqrt()
}

/// Largest absolute sample. Zero for an empty slice.
pub fn max_abs(y: &[f32]) -> f32 {
    y.iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
}

/// Spectral convergence between a target and an estimated magnitude
/// spectrogram: `||target - estimate||_F / ||target||_F`.
///
/// Only the overlapping `(n_freq, n_frames)` region is compared.
///
/// # Errors
/// Returns an error if the frequency axes differ or the target has no energy.
pub fn spectral_convergence(target: &Array2<f32>, estimate: &Array2<f32>) -> crate::Result<f32> {
    if target.nrows() != estimate.nrows() {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("{} frequency bins", target.nrows()),
            got: format!("{} frequency bins", estimate.nrows()),
        });
    }
    let n_frames = target.ncols().min(estimate.ncols());
    let mut diff = 0.0f32;
    let mut energy = 0.0f32;
    for f in 0..target.nrows() {
        for t in 0..n_frames {
            let d = target[(f, t)] - estimate[(f, t)];
            diff += d * d;
            energy += target[(f, t)] * target[(f, t)];
        }
    }
    if energy <= 0.0 {
        return Err(crate::Error::InvalidParameter {
            name: "target",
            value: energy.to_string(),
            reason: "spectrogram must have non-zero energy".to_string(),
        });
    }
    Ok((diff / energy).sqrt())
}
