use std::path::PathBuf;

use clap::Parser;
use parakeet::Error;

#[derive(Parser)]
#[command(name = "parakeet", about = "Transcribe a single audio file to text")]
struct Cli {
    /// Path to the audio file to transcribe.
    audio: PathBuf,
}

/// What a finished run writes and how it exits. Stdout carries only the
/// transcript; every diagnostic line belongs on stderr.
struct Outcome {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: i32,
}

/// Map the library result onto the process contract: transcript on stdout
/// and exit 0; nothing on stdout for a no-speech run (still exit 0); a
/// single `Error: …` line on stderr and exit 1 for every failure, with the
/// shorter-audio hint for accelerator memory exhaustion.
fn render_outcome(result: parakeet::Result<Option<String>>) -> Outcome {
    match result {
        Ok(Some(text)) => Outcome {
            stdout: Some(text),
            stderr: None,
            exit_code: 0,
        },
        Ok(None) => Outcome {
            stdout: None,
            stderr: None,
            exit_code: 0,
        },
        Err(Error::AcceleratorOom) => Outcome {
            stdout: None,
            stderr: Some("Error: GPU out of memory. Try a shorter audio file.".into()),
            exit_code: 1,
        },
        Err(e) => Outcome {
            stdout: None,
            stderr: Some(format!("Error: {e}")),
            exit_code: 1,
        },
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Fail fast on a bad path before any logging or model machinery runs.
    if let Err(e) = parakeet::validate_audio_file(&cli.audio) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // All diagnostics go to stderr; stdout carries only the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(parakeet::silence::filter_directives())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
    parakeet::silence::capture_native_logs();

    let outcome = render_outcome(parakeet::transcribe_file(&cli.audio).await);

    if let Some(text) = outcome.stdout {
        println!("{text}");
    }
    if let Some(message) = outcome.stderr {
        eprintln!("{message}");
    }
    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }
}
