//! Causal, single-pass phase reconstruction from magnitude frames.
//!
//! The engine keeps one window of audio under construction. For every
//! incoming magnitude frame it estimates a phase from that buffer, imposes
//! the magnitude, overlap-adds the inverse transform back into the buffer,
//! emits the oldest hop and shifts by one hop.

mod config;
mod processor;
mod state;
mod stream;
mod windows;

pub use config::{DEFAULT_EPS, RtsiConfig, SEED_AMPLITUDE};
pub use processor::Rtsi;
pub use state::RunningState;
pub use stream::{Padding, audio_to_spect};
pub use windows::WindowSet;
