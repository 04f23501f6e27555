//! # Command-line entry point
//!
//! Thin wrapper around the stegotext library.
//!
//! ## Usage
//!
//! ```bash
//! # Demo run: decode the sample image, then encode the built-in text
//! cargo run
//!
//! # Individual pipelines, with the defaults overridable
//! cargo run -- decode --input images/encoded_sample.png
//! cargo run -- encode --text "hidden words" --cover images/samoyed.jpg
//! ```
//!
//! With no subcommand the program reproduces the original demo flow:
//! 1. Decode the default sample image and save the visualization
//! 2. Render the built-in sample text, save the intermediate mask,
//!    embed it into the default cover image and save the result

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};

use stegotext::config::{load_config, StegoConfig};
use stegotext::{decoder, encoder, io, render};

/// Command-line arguments for the stegotext binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file overriding the default artifact paths
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read an image's red-channel LSBs into a black/white visualization
    Decode {
        /// Encoded image to read (defaults to the configured sample)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the decoded visualization
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render text and embed it into a cover image's red-channel LSBs
    Encode {
        /// Text to embed (defaults to the configured demo text)
        #[arg(short, long)]
        text: Option<String>,
        /// Cover image used as the encoding substrate
        #[arg(long)]
        cover: Option<PathBuf>,
        /// Where to write the intermediate rendered-text mask
        #[arg(long)]
        text_image: Option<PathBuf>,
        /// Where to write the encoded image
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Logs are printed to stdout with INFO level by default.
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => StegoConfig::default(),
    };

    match args.command {
        Some(Command::Decode { input, output }) => {
            run_decode(
                &input.unwrap_or(config.decode_input),
                &output.unwrap_or(config.decode_output),
            )?;
        }
        Some(Command::Encode {
            text,
            cover,
            text_image,
            output,
        }) => {
            run_encode(
                &text.unwrap_or(config.demo_text),
                &cover.unwrap_or(config.cover_image),
                &text_image.unwrap_or(config.rendered_text_output),
                &output.unwrap_or(config.encode_output),
            )?;
        }
        None => {
            // The original demo: two independent pipelines, back to back.
            // The decode step reads a pre-existing sample, not the image
            // the encode step is about to produce.
            info!("Decoding the image...");
            run_decode(&config.decode_input, &config.decode_output)?;

            info!("Encoding the image...");
            run_encode(
                &config.demo_text,
                &config.cover_image,
                &config.rendered_text_output,
                &config.encode_output,
            )?;
        }
    }

    Ok(())
}

/// Decode `input`'s red-channel LSBs and save the visualization to `output`.
fn run_decode(input: &Path, output: &Path) -> anyhow::Result<()> {
    let encoded = io::load_image(input)?;
    let decoded = decoder::decode(&encoded);
    io::save_image(&decoded, output)?;
    Ok(())
}

/// Render `text` at the cover's size, save the mask to `text_image`, embed
/// it into the cover and save the encoded result to `output`.
fn run_encode(text: &str, cover: &Path, text_image: &Path, output: &Path) -> anyhow::Result<()> {
    let cover = io::load_image(cover)?;
    let mask = render::render_text(text, cover.width(), cover.height());
    io::save_image(&mask, text_image)?;
    let encoded = encoder::apply_mask(&mask, &cover)?;
    io::save_image(&encoded, output)?;
    Ok(())
}
