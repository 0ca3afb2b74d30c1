/// Crate-level error type for the rtsi spectrogram inversion library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A required dimension is zero or invalid.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Input array has incorrect shape for the operation.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Audio data is empty when a non-empty signal was required.
    #[error("audio data is empty")]
    EmptyAudio,

    /// Audio data contains non-finite values (NaN or Inf).
    #[error("audio data contains non-finite values")]
    NonFiniteAudio,

    /// A magnitude frame contains non-finite values (NaN or Inf).
    #[error("magnitude frame contains non-finite values")]
    NonFiniteMagnitude,

    /// A magnitude frame contains a negative bin.
    #[error("magnitude frame contains a negative value at bin {bin}: {value}")]
    NegativeMagnitude { bin: usize, value: f32 },

    /// Real FFT buffer errors.
    #[error(transparent)]
    Fft(#[from] realfft::FftError),
}

/// Convenience Result type for rtsi operations.
pub type Result<T> = std::result::Result<T, Error>;
