//! Sauti Core - Text-to-Speech Synthesis Pipeline
//!
//! This crate provides the synthesis pipeline behind the `sauti` command-line
//! tool: request types with validation, an injectable [`SynthesisEngine`]
//! trait, and an implementation that delegates to the Microsoft Edge
//! read-aloud neural voices service over a WebSocket.
//!
//! # Example
//!
//! ```ignore
//! use sauti_core::{synthesize_to_file, EdgeEngine, SynthesisRequest};
//!
//! let request = SynthesisRequest::new("Hello, world!");
//! let engine = EdgeEngine::new();
//! synthesize_to_file(&engine, &request, "hello.mp3".as_ref()).await?;
//! ```

pub mod engine;
pub mod error;
pub mod request;
pub mod synth;

pub use engine::{EdgeEngine, SynthesisEngine};
pub use error::{Error, Result};
pub use request::SynthesisRequest;
pub use synth::synthesize_to_file;
