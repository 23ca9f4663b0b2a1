//! Single-file speech-to-text — audio file in, plain transcript out.
//!
//! **parakeet** runs one transcription per process: validate the input path,
//! quiet noisy diagnostics, load a fixed pretrained model (weights parsed on
//! the CPU first, accelerator offload when a backend is compiled in), run a
//! single inference call, and hand back the trimmed transcript — or `None`
//! when no speech was detected.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> parakeet::Result<()> {
//! if let Some(text) = parakeet::transcribe_file("meeting.wav").await? {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Accelerator support is a build-time choice: enable the `cuda` or `vulkan`
//! feature. Without either, runs fall back to the CPU with a warning.

pub(crate) mod audio;
pub mod config;
pub mod error;
pub mod model;
pub mod silence;
pub(crate) mod transcribe;
pub mod types;
pub mod validate;

pub use config::TranscribeOptions;
pub use error::{Error, Result};
pub use types::RawResult;
pub use validate::validate_audio_file;

use std::path::Path;

/// Transcribe a local audio file with default options.
pub async fn transcribe_file(path: impl AsRef<Path>) -> Result<Option<String>> {
    transcribe_file_with_options(path, &TranscribeOptions::default()).await
}

/// Transcribe a local audio file with custom options.
///
/// Validation runs before any model work, so a bad path never triggers a
/// model download or load.
pub async fn transcribe_file_with_options(
    path: impl AsRef<Path>,
    options: &TranscribeOptions,
) -> Result<Option<String>> {
    let path = validate::validate_audio_file(path)?;

    let model_path = model::ensure_model(options).await?;
    let mut speech_model = transcribe::load_model(&model_path, options)?;

    transcribe::transcribe_one(&mut speech_model, &path)
}
