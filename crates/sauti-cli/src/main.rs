//! sauti - command-line text to speech via the Edge read-aloud service

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;

use args::Args;
use sauti_core::{synthesize_to_file, EdgeEngine, Error, SynthesisRequest};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sauti=warn,sauti_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> sauti_core::Result<()> {
    debug!(?args, "parsed arguments");
    let (text, output) = required_arguments(&args)?;

    let mut request = SynthesisRequest::new(text);
    request.voice = args.voice;
    request.rate = args.rate;
    request.volume = args.volume;

    let engine = EdgeEngine::new();
    synthesize_to_file(&engine, &request, &output).await
}

/// Enforce the presence of `--text` and `--output` before any network call
fn required_arguments(args: &Args) -> sauti_core::Result<(String, PathBuf)> {
    match (&args.text, &args.output) {
        (Some(text), Some(output))
            if !text.is_empty() && !output.as_os_str().is_empty() =>
        {
            Ok((text.clone(), output.clone()))
        }
        _ => Err(Error::MissingArguments),
    }
}
