//! One-time diagnostic verbosity policy.
//!
//! Transcription pulls in several dependencies that are chatty at info level
//! and below. This module supplies the filter the binary installs before any
//! of them run, so stdout stays reserved for the transcript and stderr is not
//! flooded with progress chatter.

/// Subsystems known to be noisy during model download and inference.
const QUIET_TARGETS: [&str; 5] = ["whisper_rs", "hyper", "reqwest", "h2", "rustls"];

/// Build the `EnvFilter` directive string for a transcription run.
///
/// Our own crates log at info; every target in [`QUIET_TARGETS`] is dropped
/// to error-only. Intended to be installed exactly once, before the model is
/// touched.
pub fn filter_directives() -> String {
    let mut spec = String::from("parakeet=info,parakeet_cli=info");
    for target in QUIET_TARGETS {
        spec.push(',');
        spec.push_str(target);
        spec.push_str("=error");
    }
    spec
}

/// Route whisper.cpp's native logging through `tracing` so the filter above
/// applies to it too.
///
/// The hook only exists when the `native-log-capture` feature is enabled;
/// without it this is a no-op and whisper.cpp writes to stderr directly.
#[cfg(feature = "native-log-capture")]
pub fn capture_native_logs() {
    whisper_rs::install_logging_hooks();
}

#[cfg(not(feature = "native-log-capture"))]
pub fn capture_native_logs() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_keep_own_crates_at_info() {
        let spec = filter_directives();
        assert!(spec.starts_with("parakeet=info"));
        assert!(spec.contains("parakeet_cli=info"));
    }

    #[test]
    fn test_directives_quiet_every_noisy_target() {
        let spec = filter_directives();
        for target in QUIET_TARGETS {
            assert!(
                spec.contains(&format!("{target}=error")),
                "missing directive for {target}"
            );
        }
    }

    #[test]
    fn test_capture_native_logs_is_callable() {
        // No-op without the native-log-capture feature; must never panic.
        capture_native_logs();
    }
}
