use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Sample rate whisper.cpp expects.
const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Cap on decoded audio length (4 hours). 16kHz mono f32 is ~230 MB/hour;
/// anything past this is almost certainly a mistaken input.
const MAX_DURATION_SECS: f64 = 4.0 * 3600.0;

/// Decode an audio file to 16kHz mono f32 samples via an ffmpeg subprocess.
///
/// ffmpeg handles format detection, decoding, channel downmix, and
/// resampling in one shot, so every container/codec ffmpeg knows is
/// accepted. Its own console output is held at error level to keep stderr
/// quiet.
pub(crate) fn decode_audio(path: &Path) -> Result<Vec<f32>> {
    let output = Command::new("ffmpeg")
        .args(["-nostdin", "-hide_banner", "-loglevel", "error", "-i"])
        .arg(path)
        .args(["-f", "f32le", "-ac", "1", "-ar"])
        .arg(TARGET_SAMPLE_RATE.to_string())
        .arg("-")
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::AudioDecode("ffmpeg not found — install with: apt install ffmpeg".into())
            } else {
                Error::AudioDecode(format!("failed to run ffmpeg: {e}"))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::AudioDecode(format!(
            "ffmpeg failed: {}",
            stderr.trim()
        )));
    }

    if output.stdout.is_empty() {
        return Err(Error::AudioDecode("ffmpeg produced no samples".into()));
    }

    let samples = bytes_to_samples(&output.stdout);

    let duration = samples.len() as f64 / TARGET_SAMPLE_RATE as f64;
    debug!(
        samples = samples.len(),
        duration_secs = format!("{duration:.1}"),
        "decoded audio"
    );

    if duration > MAX_DURATION_SECS {
        return Err(Error::AudioDecode(format!(
            "audio too long ({duration:.0}s) — maximum supported duration is {MAX_DURATION_SECS:.0}s"
        )));
    }

    Ok(samples)
}

/// Reinterpret raw little-endian f32 PCM bytes as samples.
/// A trailing partial frame, if any, is dropped.
fn bytes_to_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
