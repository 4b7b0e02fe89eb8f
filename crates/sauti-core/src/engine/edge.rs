//! Edge read-aloud synthesis engine
//!
//! Opens one WebSocket session per request: send `speech.config`, send the
//! `ssml` message, then collect binary audio frames until the service signals
//! `turn.end`. No retry and no timeout; a failed session fails the request.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::{
    CACHE_CONTROL, ORIGIN, PRAGMA, USER_AGENT,
};
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tracing::debug;

use super::protocol;
use super::SynthesisEngine;
use crate::error::{Error, Result};
use crate::request::SynthesisRequest;

/// Engine backed by the Edge read-aloud service
#[derive(Debug, Default)]
pub struct EdgeEngine;

impl EdgeEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SynthesisEngine for EdgeEngine {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Bytes> {
        let mut ws_request = protocol::connection_url().into_client_request()?;
        let headers = ws_request.headers_mut();
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(ORIGIN, HeaderValue::from_static(protocol::ORIGIN));
        headers.insert(USER_AGENT, HeaderValue::from_static(protocol::USER_AGENT));

        let (stream, _) = connect_async(ws_request).await?;
        let (mut sink, mut source) = stream.split();

        let request_id = protocol::request_id();
        debug!(%request_id, voice = %request.voice, "starting synthesis turn");

        sink.send(Message::Text(protocol::speech_config_message()?))
            .await?;
        sink.send(Message::Text(protocol::ssml_message(&request_id, request)))
            .await?;

        let mut audio = BytesMut::new();
        let mut finished = false;

        while let Some(frame) = source.next().await {
            match frame? {
                Message::Binary(data) => {
                    if let Some(payload) = protocol::audio_payload(&data) {
                        audio.extend_from_slice(payload);
                    }
                }
                Message::Text(text) => match protocol::message_path(&text) {
                    Some("turn.end") => {
                        finished = true;
                        break;
                    }
                    path => debug!(?path, "service message"),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }

        if !finished {
            return Err(Error::Synthesis(
                "connection closed before synthesis completed".into(),
            ));
        }
        if audio.is_empty() {
            return Err(Error::Synthesis("service returned no audio".into()));
        }

        debug!(%request_id, bytes = audio.len(), "synthesis turn complete");
        Ok(audio.freeze())
    }
}
