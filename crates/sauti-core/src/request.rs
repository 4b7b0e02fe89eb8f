//! Synthesis request types for the sauti pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Voice used when none is requested.
pub const DEFAULT_VOICE: &str = "en-US-AriaNeural";

/// Neutral speech-rate adjustment.
pub const DEFAULT_RATE: &str = "+0%";

/// Neutral volume adjustment.
pub const DEFAULT_VOLUME: &str = "+0%";

/// Pitch is fixed in this version and not exposed on the command line.
pub const DEFAULT_PITCH: &str = "+0Hz";

/// One text-to-speech request
///
/// Prosody fields are relative adjustments in the service's own notation
/// (e.g. `+10%`, `-2Hz`) and are passed through to the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Content to synthesize
    pub text: String,

    /// Engine voice identifier
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Relative speech-rate adjustment
    #[serde(default = "default_rate")]
    pub rate: String,

    /// Relative volume adjustment
    #[serde(default = "default_volume")]
    pub volume: String,

    /// Relative pitch adjustment
    #[serde(default = "default_pitch")]
    pub pitch: String,
}

impl SynthesisRequest {
    /// Create a request for `text` with default voice and prosody
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: default_voice(),
            rate: default_rate(),
            volume: default_volume(),
            pitch: default_pitch(),
        }
    }

    /// Check the request before any network activity
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::InvalidRequest("text must not be empty".into()));
        }
        if self.voice.is_empty() {
            return Err(Error::InvalidRequest("voice must not be empty".into()));
        }
        Ok(())
    }
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_rate() -> String {
    DEFAULT_RATE.to_string()
}

fn default_volume() -> String {
    DEFAULT_VOLUME.to_string()
}

fn default_pitch() -> String {
    DEFAULT_PITCH.to_string()
}
