use std::path::PathBuf;

/// All errors that can occur in parakeet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("audio file not found: {path}")]
    AudioNotFound { path: PathBuf },

    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("audio file is empty: {path}")]
    EmptyAudio { path: PathBuf },

    #[error("audio decoding error: {0}")]
    AudioDecode(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("model not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("model download failed: {0}")]
    ModelDownload(String),

    /// Accelerator ran out of memory during inference. There is no chunking
    /// fallback; the caller should retry with shorter audio.
    #[error("accelerator out of memory during inference")]
    AcceleratorOom,

    #[error("transcription error: {0}")]
    Transcription(String),

    #[error("whisper error: {0}")]
    Whisper(#[from] whisper_rs::WhisperError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_audio_not_found() {
        let e = Error::AudioNotFound {
            path: PathBuf::from("/tmp/missing.wav"),
        };
        assert!(e.to_string().contains("/tmp/missing.wav"));
        assert!(e.to_string().contains("not found"));
    }

    #[test]
    fn test_error_display_not_a_file() {
        let e = Error::NotAFile {
            path: PathBuf::from("/tmp"),
        };
        assert_eq!(e.to_string(), "not a file: /tmp");
    }

    #[test]
    fn test_error_display_empty_audio() {
        let e = Error::EmptyAudio {
            path: PathBuf::from("/tmp/zero.wav"),
        };
        assert!(e.to_string().contains("empty"));
        assert!(e.to_string().contains("/tmp/zero.wav"));
    }

    #[test]
    fn test_error_display_model_not_found() {
        let e = Error::ModelNotFound {
            path: PathBuf::from("/tmp/model.bin"),
        };
        assert!(e.to_string().contains("/tmp/model.bin"));
    }

    #[test]
    fn test_error_display_accelerator_oom() {
        let e = Error::AcceleratorOom;
        assert!(e.to_string().contains("out of memory"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Json(_)));
    }

    #[test]
    fn test_error_debug_impl() {
        let e = Error::AudioDecode("test error".into());
        let debug = format!("{:?}", e);
        assert!(debug.contains("AudioDecode"));
    }
}
