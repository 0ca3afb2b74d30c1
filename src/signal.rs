//! Deterministic test signals.

/// Generate a pure tone with the given peak amplitude.
pub fn tone(frequency: f32, sr: u32, duration: f32, amplitude: f32) -> Vec<f32> {
    let n_samples = (duration * sr as f32) as usize;
    let angular_freq = 2.0 * std::f32::consts::PI * frequency / sr as f32;
    (0..n_samples)
        .map(|i| amplitude * (angular_freq * i as f32).sin())
        .collect()
}

/// Generate a linear frequency sweep from `f0` to `f1` Hz.
pub fn chirp(f0: f32, f1: f32, sr: u32, duration: f32) -> Vec<f32> {
    let n_samples = (duration * sr as f32) as usize;
    let k = (f1 - f0) / duration;
    (0..n_samples)
        .map(|i| {
            let t = i as f32 / sr as f32;
            let phase = 2.0 * std::f32::consts::PI * (f0 * t + 0.5 * k * t * t);
            phase.sin()
        })
        .collect()
}
