//! Synthesis engine abstraction
//!
//! The pipeline talks to an opaque engine through [`SynthesisEngine`], so the
//! validate/synthesize/write sequence can be exercised with a fake engine and
//! no network. [`EdgeEngine`] is the real implementation.

mod edge;
mod protocol;

pub use edge::EdgeEngine;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::request::SynthesisRequest;

/// A capability that turns a synthesis request into audio bytes
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Synthesize speech for `request`, returning the full audio payload
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Bytes>;
}
