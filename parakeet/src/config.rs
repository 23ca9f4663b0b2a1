use std::path::PathBuf;

/// Options for a transcription run.
///
/// The CLI runs entirely on the defaults; these knobs are library surface
/// for embedders. There is deliberately no model-name option — this crate
/// runs one fixed model (see [`crate::model::MODEL_NAME`]), and the only
/// override is a local weight file.
pub struct TranscribeOptions {
    /// Path to a local ggml weight file, bypassing the download cache.
    pub model_path: Option<PathBuf>,
    /// Directory for downloaded model weights.
    pub cache_dir: Option<PathBuf>,
    /// Offload to an accelerator when one is compiled in.
    pub gpu: bool,
    /// Accelerator device ID.
    pub gpu_device: u32,
    /// Decoder threads (default: whisper.cpp's own choice).
    pub n_threads: Option<u32>,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            model_path: None,
            cache_dir: None,
            gpu: true,
            gpu_device: 0,
            n_threads: None,
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_path(mut self, path: PathBuf) -> Self {
        self.model_path = Some(path);
        self
    }

    pub fn cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    pub fn gpu(mut self, enabled: bool) -> Self {
        self.gpu = enabled;
        self
    }

    pub fn gpu_device(mut self, device: u32) -> Self {
        self.gpu_device = device;
        self
    }

    pub fn n_threads(mut self, n: u32) -> Self {
        self.n_threads = Some(n);
        self
    }

    /// Resolve the cache directory, defaulting to ~/.cache/parakeet/models.
    pub fn resolve_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join("parakeet")
                .join("models")
        })
    }
}
