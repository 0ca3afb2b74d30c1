//! Real-time spectrogram inversion for Rust.
//!
//! Rtsi turns a stream of magnitude-only spectrogram frames back into audio
//! causally and in a single pass. Each hop of audio is emitted as soon as
//! its magnitude frame arrives; the phase is estimated from the audio that
//! has already been produced, never from future frames and never by
//! revisiting a frame. Compared with iterative methods such as Griffin-Lim,
//! this trades some reconstruction accuracy for bounded latency and a
//! constant amount of work per frame.
//!
//! # Quick Start
//!
//! ```rust
//! use rtsi::{Rtsi, RtsiConfig, inversion::Padding, signal};
//!
//! // 0.25 s of a 440 Hz tone at 8 kHz
//! let audio = signal::tone(440.0, 8000, 0.25, 0.5);
//!
//! let mut engine = Rtsi::new(RtsiConfig::new(256, 64).with_seed(1)).unwrap();
//! let spect = engine.audio_to_spect(&audio, Padding::ShapePreserving).unwrap();
//! assert_eq!(spect.shape()[0], 129);
//!
//! // Shape-preserving padding gives back the input length rounded up to a hop:
//! // 2000 samples -> 2048
//! let restored = engine.spect_to_audio(&spect).unwrap();
//! assert_eq!(restored.len(), 2048);
//! ```
//!
//! Frames can also be fed one at a time as they arrive:
//!
//! ```rust
//! use rtsi::Rtsi;
//!
//! let mut engine = Rtsi::with_lengths(1024, 256).unwrap();
//! let frame = vec![0.5f32; 513];
//! let hop = engine.process(&frame).unwrap();
//! assert_eq!(hop.len(), 256);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`inversion`] | The streaming inverter: configuration, window set, running state, per-frame update |
//! | [`spectrum`] | STFT and magnitude spectrograms (the analysis side) |
//! | [`fft`] | Cached complex and real FFT plans |
//! | [`window`] | Hann windows and the asymmetric correction window |
//! | [`utils`] | Padding, validation and comparison metrics |
//! | [`signal`] | Tone and chirp generators |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. Configuration problems (for example a
//! frame length that is not a multiple of the hop length) surface when an
//! engine is built. Once built, [`Rtsi::process`] only fails on malformed
//! input frames; silent or near-silent input is handled internally.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. The library never installs a
//! logger.
//!
//! # Safety
//!
//! This crate uses `#![deny(unsafe_code)]` and contains no unsafe blocks.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` | Compute STFT frames on the rayon thread pool |

#![deny(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod fft;
pub mod inversion;
pub mod signal;
pub mod spectrum;
pub mod utils;
pub mod window;

pub use inversion::{Rtsi, RtsiConfig};
