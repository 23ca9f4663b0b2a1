use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::TranscribeOptions;
use crate::error::{Error, Result};

/// The one model this crate runs. The f16 weight file keeps the resident
/// size at roughly half of the f32 equivalent.
pub const MODEL_NAME: &str = "large-v3-turbo";

const HUGGINGFACE_BASE: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Anything smaller than this is an HTML error page, not a weight file.
const MIN_MODEL_BYTES: u64 = 1_000_000;

/// Weight filename as published by HuggingFace / whisper.cpp.
fn model_filename() -> String {
    format!("ggml-{MODEL_NAME}.bin")
}

/// Ensure the model weights are available locally, downloading on first use.
/// Returns the path to the weight file.
pub async fn ensure_model(options: &TranscribeOptions) -> Result<PathBuf> {
    if let Some(path) = &options.model_path {
        return if path.exists() {
            Ok(path.clone())
        } else {
            Err(Error::ModelNotFound { path: path.clone() })
        };
    }

    let filename = model_filename();
    let cache_dir = options.resolve_cache_dir();
    let model_path = cache_dir.join(&filename);

    if model_path.exists() {
        info!(path = %model_path.display(), "model already cached");
        return Ok(model_path);
    }

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        Error::Model(format!(
            "failed to create cache dir {}: {e}",
            cache_dir.display()
        ))
    })?;

    let url = format!("{HUGGINGFACE_BASE}/{filename}");
    info!(%url, "downloading model");
    download_model(&url, &model_path).await?;

    Ok(model_path)
}

async fn download_model(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::ModelDownload(format!("HTTP error: {e}")))?;

    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
            .expect("valid template")
            .progress_chars("#>-"),
    );
    pb.set_message(format!(
        "Downloading {}",
        dest.file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    ));

    // Stream to a temp file first; only a complete download gets renamed
    // into place.
    let tmp_path = dest.with_extension("bin.part");
    let mut file = std::fs::File::create(&tmp_path)?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    use std::io::Write;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()?;
    drop(file);

    let file_size = std::fs::metadata(&tmp_path)?.len();
    if file_size < MIN_MODEL_BYTES {
        std::fs::remove_file(&tmp_path).ok();
        return Err(Error::ModelDownload(format!(
            "downloaded file too small ({file_size} bytes) — likely an error page"
        )));
    }

    std::fs::rename(&tmp_path, dest)?;
    pb.finish_with_message("Download complete");

    if total_size > 0 && file_size != total_size {
        warn!(
            expected = total_size,
            actual = file_size,
            "file size mismatch — model may be corrupt"
        );
    }

    info!(path = %dest.display(), size = file_size, "model saved");
    Ok(())
}

/// Whether an accelerator backend was compiled in.
///
/// whisper.cpp backends are a build-time choice; without the `cuda` or
/// `vulkan` feature there is nothing to probe at runtime.
pub fn accelerator_available() -> bool {
    cfg!(any(feature = "cuda", feature = "vulkan"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_model_filename_derived_from_name() {
        let filename = model_filename();
        assert_eq!(filename, format!("ggml-{MODEL_NAME}.bin"));
        assert!(filename.contains(MODEL_NAME));
    }

    #[test]
    fn test_accelerator_matches_compiled_backends() {
        assert_eq!(
            accelerator_available(),
            cfg!(any(feature = "cuda", feature = "vulkan"))
        );
    }

    #[tokio::test]
    async fn test_ensure_model_custom_path_exists() {
        let tmp = std::env::temp_dir().join("parakeet_test_custom_model.bin");
        fs::write(&tmp, b"fake model data").unwrap();

        let opts = TranscribeOptions::new().model_path(tmp.clone());
        let result = ensure_model(&opts).await;
        assert_eq!(result.unwrap(), tmp);

        fs::remove_file(&tmp).ok();
    }

    #[tokio::test]
    async fn test_ensure_model_custom_path_missing() {
        let opts =
            TranscribeOptions::new().model_path(PathBuf::from("/nonexistent/model.bin"));
        let result = ensure_model(&opts).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ModelNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_ensure_model_uses_cache() {
        let tmp = std::env::temp_dir().join("parakeet_test_model_cache");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        // Pre-populate the cache so no download is attempted.
        let model_path = tmp.join(model_filename());
        fs::write(&model_path, b"fake cached model").unwrap();

        let opts = TranscribeOptions::new().cache_dir(tmp.clone());
        let result = ensure_model(&opts).await;
        assert_eq!(result.unwrap(), model_path);

        fs::remove_dir_all(&tmp).ok();
    }
}
