mod framing;
mod metrics;
mod validation;

// Framing and padding operations
pub use framing::{fix_length, frame_count, pad_for_hop_length, pad_for_shape_preserving_inverse};

// Signal comparison metrics
pub use metrics::{max_abs, mse, rms, spectral_convergence};

// Validation operations
pub use validation::{valid_audio, valid_magnitude_frame};
