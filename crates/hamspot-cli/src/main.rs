//! hamspot-cli: validate and encode a photo without a browser.
//!
//! Runs the pure half of the submission pipeline (validation and
//! data-URL encoding) on a local file and prints a summary. Useful
//! for checking what the page would send to the detection endpoint
//! for a given photo, and for sizing request bodies.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin hamspot-cli -- [--json] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hamspot_core::{FileSelection, SubmittedFile, encode, validate_selection};
use serde::Serialize;

/// Validate and encode a photo the way the hamspot page does.
#[derive(Parser)]
#[command(name = "hamspot-cli", version)]
struct Cli {
    /// Path to the photo (JPEG or PNG).
    image_path: PathBuf,

    /// Output the summary as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,
}

/// What the pipeline produced for one file.
#[derive(Serialize)]
struct Summary {
    /// Display name of the file.
    name: String,
    /// Canonical MIME type the submission was accepted as.
    mime: &'static str,
    /// Raw file length in bytes.
    byte_len: usize,
    /// Length of the full data URL in characters.
    encoded_len: usize,
    /// The `data:<mime>;base64,` prefix of the request body.
    data_url_prefix: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let name = cli
        .image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let selection = FileSelection::from_name(name.clone());
    let mime = match validate_selection(Some(&selection)) {
        Ok(mime) => mime,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read the selected file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let file = SubmittedFile {
        name: name.clone(),
        mime,
        bytes,
    };
    let byte_len = file.bytes.len();
    let encoded = encode::to_data_url(&file);

    let prefix_len = "data:;base64,".len() + mime.as_str().len();
    let summary = Summary {
        name,
        mime: mime.as_str(),
        byte_len,
        encoded_len: encoded.as_str().len(),
        data_url_prefix: encoded.as_str().chars().take(prefix_len).collect(),
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("file:        {}", summary.name);
        println!("mime:        {}", summary.mime);
        println!("bytes:       {}", summary.byte_len);
        println!("encoded len: {}", summary.encoded_len);
        println!("body prefix: {}\u{2026}", summary.data_url_prefix);
    }

    ExitCode::SUCCESS
}
