//! Command-line arguments
//!
//! `text` and `output` are modeled as optional so the missing-argument
//! diagnostic (and its exit code) stays under our control instead of clap's.

use std::path::PathBuf;

use clap::Parser;
use sauti_core::request::{DEFAULT_RATE, DEFAULT_VOICE, DEFAULT_VOLUME};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sauti", version, about = "Convert text to speech with Edge neural voices")]
pub struct Args {
    /// Text to synthesize
    #[arg(long)]
    pub text: Option<String>,

    /// Destination file for the audio payload
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Engine voice identifier
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Relative speech rate, e.g. +10%
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    pub rate: String,

    /// Relative volume, e.g. -20%
    #[arg(long, default_value = DEFAULT_VOLUME, allow_hyphen_values = true)]
    pub volume: String,
}
