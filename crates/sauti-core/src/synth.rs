//! The validate → synthesize → write pipeline
//!
//! A failure at any step aborts the invocation; nothing is recovered locally
//! and a pre-existing output file is only replaced after synthesis succeeds.

use std::path::Path;

use tracing::{debug, info};

use crate::engine::SynthesisEngine;
use crate::error::{Error, Result};
use crate::request::SynthesisRequest;

/// Synthesize `request` with `engine` and write the audio to `path`
///
/// The file is written in full, overwriting any existing file at `path`.
pub async fn synthesize_to_file(
    engine: &dyn SynthesisEngine,
    request: &SynthesisRequest,
    path: &Path,
) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingArguments);
    }
    request.validate()?;

    debug!(voice = %request.voice, rate = %request.rate, "requesting synthesis");
    let audio = engine.synthesize(request).await?;

    tokio::fs::write(path, &audio).await?;
    info!(bytes = audio.len(), path = %path.display(), "audio written");
    Ok(())
}
