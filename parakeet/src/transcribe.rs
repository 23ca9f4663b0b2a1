use std::path::Path;

use tracing::{debug, info, warn};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio;
use crate::config::TranscribeOptions;
use crate::error::{Error, Result};
use crate::model;
use crate::types::RawResult;

/// The engine seam: one inference call over a batch of audio files, one
/// [`RawResult`] per input.
///
/// The production implementation wraps whisper.cpp; tests substitute mocks.
pub(crate) trait SpeechModel {
    fn transcribe(&mut self, paths: &[&Path]) -> Result<Vec<RawResult>>;
}

/// A loaded whisper.cpp model, ready for inference.
pub(crate) struct WhisperSpeechModel {
    ctx: WhisperContext,
    n_threads: Option<u32>,
}

/// Load the model with memory-conscious placement.
///
/// Weights are parsed host-side first; accelerator offload happens only when
/// a backend is compiled in and enabled. A missing accelerator is a degraded
/// path, not a failure — the run continues on CPU with a warning.
pub(crate) fn load_model(
    model_path: &Path,
    options: &TranscribeOptions,
) -> Result<WhisperSpeechModel> {
    info!(model = %model_path.display(), "loading model weights on CPU");

    let use_gpu = should_offload(options);
    if use_gpu {
        info!(device = options.gpu_device, "moving model to GPU");
    } else {
        warn!("no accelerator available, running on CPU (this will be slow)");
    }

    let mut ctx_params = WhisperContextParameters::new();
    ctx_params.use_gpu(use_gpu);
    ctx_params.gpu_device(options.gpu_device as i32);

    let ctx = WhisperContext::new_with_params(
        model_path
            .to_str()
            .ok_or_else(|| Error::Model("model path contains invalid UTF-8".into()))?,
        ctx_params,
    )?;

    Ok(WhisperSpeechModel {
        ctx,
        n_threads: options.n_threads,
    })
}

impl SpeechModel for WhisperSpeechModel {
    fn transcribe(&mut self, paths: &[&Path]) -> Result<Vec<RawResult>> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            let samples = audio::decode_audio(path)?;

            let mut state = self.ctx.create_state()?;

            let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });
            params.set_language(language_request());
            if let Some(n) = self.n_threads {
                params.set_n_threads(n as i32);
            }

            // Keep stdout reserved for the transcript and stderr quiet.
            params.set_print_progress(false);
            params.set_print_realtime(false);
            params.set_print_timestamps(false);

            debug!(samples = samples.len(), "running inference");
            state.full(params, &samples).map_err(map_inference_error)?;

            let num_segments = state.full_n_segments();
            let mut text = String::new();
            for i in 0..num_segments {
                let segment = state
                    .get_segment(i)
                    .ok_or_else(|| Error::Transcription(format!("segment {i} not found")))?;
                let piece = segment
                    .to_str_lossy()
                    .map_err(|e| Error::Transcription(format!("segment text error: {e}")))?;
                let piece = piece.trim();
                if piece.is_empty() {
                    continue;
                }
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(piece);
            }

            results.push(RawResult::Text(text));
        }

        Ok(results)
    }
}

/// Language passed to whisper. Auto-detection must go through the language
/// field: the separate `detect_language` flag makes `whisper_full` return
/// right after the detection pass, before the decoder produces any
/// segments.
fn language_request() -> Option<&'static str> {
    Some("auto")
}

/// Offload only when an accelerator backend is compiled in and the caller
/// hasn't disabled it. A `false` here selects the degraded CPU path, never
/// an error.
fn should_offload(options: &TranscribeOptions) -> bool {
    options.gpu && model::accelerator_available()
}

/// whisper.cpp reports accelerator allocation failures through a generic
/// error code; the message text is the only signal. An out-of-memory failure
/// gets its own variant so callers can surface the shorter-audio hint.
fn map_inference_error(err: whisper_rs::WhisperError) -> Error {
    let msg = err.to_string().to_lowercase();
    if msg.contains("out of memory") || msg.contains("failed to allocate") {
        Error::AcceleratorOom
    } else {
        Error::Whisper(err)
    }
}

/// Run one inference call over a single-file batch and flatten the output to
/// trimmed text.
///
/// An empty or missing output sequence, or text that is empty after
/// trimming, is a valid no-speech outcome — `Ok(None)`, not an error.
pub(crate) fn transcribe_one(
    speech_model: &mut impl SpeechModel,
    audio_path: &Path,
) -> Result<Option<String>> {
    debug!(path = %audio_path.display(), "transcribing");

    let output = speech_model.transcribe(&[audio_path])?;

    let Some(first) = output.into_iter().next() else {
        return Ok(None);
    };

    let text = first.into_text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
