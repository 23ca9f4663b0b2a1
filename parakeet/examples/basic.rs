//! Transcribe a local audio file and print the text.
//!
//! Usage: cargo run --example basic -- path/to/audio.wav

#[tokio::main]
async fn main() -> parakeet::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <audio-file>");

    match parakeet::transcribe_file(&path).await? {
        Some(text) => println!("{text}"),
        None => eprintln!("no speech detected"),
    }

    Ok(())
}
