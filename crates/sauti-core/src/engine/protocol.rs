//! Wire format for the Edge read-aloud service
//!
//! Messages are text frames of `Key:Value` headers separated from the body by
//! a blank line. Audio arrives in binary frames carrying a big-endian u16
//! header-length prefix, the header text, then the payload.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::Result;
use crate::request::SynthesisRequest;

const WSS_URL: &str =
    "wss://speech.platform.bing.com/consumer/speech/synthesize/readaloud/edge/v1";

const TRUSTED_CLIENT_TOKEN: &str = "6A5AA1D4EAFF4E9FB37E23D68491D6F4";

/// Chromium version the Sec-MS-GEC-Version header claims.
const SEC_MS_GEC_VERSION: &str = "1-130.0.2849.68";

pub const ORIGIN: &str = "chrome-extension://jdiccldimpdaibmpdkjnbmckianbfold";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36 \
     Edg/130.0.0.0";

/// Output format requested from the service. The payload is opaque to us;
/// this selects the MP3 stream the browser feature uses.
const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Seconds between the Windows epoch (1601) and the Unix epoch (1970).
const WINDOWS_EPOCH_OFFSET_SECS: u64 = 11_644_473_600;

/// Build the connection URL with a fresh connection id and clock token
pub fn connection_url() -> String {
    let connection_id = Uuid::new_v4().simple();
    format!(
        "{WSS_URL}?TrustedClientToken={TRUSTED_CLIENT_TOKEN}\
         &Sec-MS-GEC={}&Sec-MS-GEC-Version={SEC_MS_GEC_VERSION}\
         &ConnectionId={connection_id}",
        sec_ms_gec()
    )
}

/// Clock-derived request token
///
/// SHA-256 of the current Windows file time, rounded down to a five minute
/// boundary, concatenated with the trusted client token; uppercase hex.
fn sec_ms_gec() -> String {
    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let ticks = (unix_secs + WINDOWS_EPOCH_OFFSET_SECS) / 300 * 300 * 10_000_000;

    let mut hasher = Sha256::new();
    hasher.update(format!("{ticks}{TRUSTED_CLIENT_TOKEN}"));
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect()
}

/// Fresh request id for the ssml message
pub fn request_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The `speech.config` message selecting the output format
pub fn speech_config_message() -> Result<String> {
    let config = json!({
        "context": {
            "synthesis": {
                "audio": {
                    "metadataoptions": {
                        "sentenceBoundaryEnabled": "false",
                        "wordBoundaryEnabled": "false"
                    },
                    "outputFormat": OUTPUT_FORMAT
                }
            }
        }
    });

    Ok(format!(
        "X-Timestamp:{}\r\nContent-Type:application/json; charset=utf-8\r\nPath:speech.config\r\n\r\n{}",
        timestamp(),
        serde_json::to_string(&config)?
    ))
}

/// The `ssml` message carrying one synthesis request
pub fn ssml_message(request_id: &str, request: &SynthesisRequest) -> String {
    format!(
        "X-RequestId:{request_id}\r\nContent-Type:application/ssml+xml\r\nX-Timestamp:{}Z\r\nPath:ssml\r\n\r\n{}",
        timestamp(),
        build_ssml(request)
    )
}

/// Wrap a request in the SSML envelope the service expects
pub fn build_ssml(request: &SynthesisRequest) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='en-US'>\
         <voice name='{}'><prosody pitch='{}' rate='{}' volume='{}'>{}</prosody></voice></speak>",
        xml_escape(&request.voice),
        xml_escape(&request.pitch),
        xml_escape(&request.rate),
        xml_escape(&request.volume),
        xml_escape(&request.text),
    )
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The `Path` header of a text frame, if present
pub fn message_path(message: &str) -> Option<&str> {
    let header = message.split("\r\n\r\n").next()?;
    header
        .lines()
        .find_map(|line| line.strip_prefix("Path:"))
        .map(str::trim)
}

/// Audio payload of a binary frame
///
/// Returns `None` for frames that are malformed or do not carry audio.
pub fn audio_payload(frame: &[u8]) -> Option<&[u8]> {
    if frame.len() < 2 {
        return None;
    }
    let header_len = u16::from_be_bytes([frame[0], frame[1]]) as usize;
    let body_start = 2 + header_len;
    if frame.len() < body_start {
        return None;
    }
    let header = std::str::from_utf8(&frame[2..body_start]).ok()?;
    if header.contains("Path:audio") {
        Some(&frame[body_start..])
    } else {
        None
    }
}

fn timestamp() -> String {
    Utc::now()
        .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssml_interpolates_request_fields() {
        let mut request = SynthesisRequest::new("Hello");
        request.voice = "en-GB-RyanNeural".to_string();
        request.rate = "+10%".to_string();

        let ssml = build_ssml(&request);
        assert!(ssml.contains("<voice name='en-GB-RyanNeural'>"));
        assert!(ssml.contains("rate='+10%'"));
        assert!(ssml.contains("volume='+0%'"));
        assert!(ssml.contains("pitch='+0Hz'"));
        assert!(ssml.contains(">Hello</prosody>"));
    }

    #[test]
    fn test_ssml_escapes_text() {
        let request = SynthesisRequest::new("a < b & c > \"d\"");
        let ssml = build_ssml(&request);
        assert!(ssml.contains("a &lt; b &amp; c &gt; &quot;d&quot;"));
        assert!(!ssml.contains("a < b"));
    }

    #[test]
    fn test_speech_config_selects_mp3() {
        let message = speech_config_message().unwrap();
        assert!(message.contains("Path:speech.config"));
        assert!(message.contains("audio-24khz-48kbitrate-mono-mp3"));
    }

    #[test]
    fn test_ssml_message_headers() {
        let request = SynthesisRequest::new("Hi");
        let message = ssml_message("abc123", &request);
        assert!(message.starts_with("X-RequestId:abc123\r\n"));
        assert!(message.contains("Path:ssml\r\n\r\n<speak"));
    }

    #[test]
    fn test_message_path() {
        let message = "X-RequestId:1\r\nPath:turn.end\r\n\r\n{}";
        assert_eq!(message_path(message), Some("turn.end"));
        assert_eq!(message_path("no headers here"), None);
    }

    #[test]
    fn test_audio_payload_extracts_body() {
        let header = b"Path:audio\r\n";
        let mut frame = Vec::new();
        frame.extend_from_slice(&(header.len() as u16).to_be_bytes());
        frame.extend_from_slice(header);
        frame.extend_from_slice(&[1, 2, 3, 4]);

        assert_eq!(audio_payload(&frame), Some(&[1u8, 2, 3, 4][..]));
    }

    #[test]
    fn test_audio_payload_ignores_other_frames() {
        let header = b"Path:turn.start\r\n";
        let mut frame = Vec::new();
        frame.extend_from_slice(&(header.len() as u16).to_be_bytes());
        frame.extend_from_slice(header);
        frame.extend_from_slice(&[1, 2, 3]);

        assert_eq!(audio_payload(&frame), None);
    }

    #[test]
    fn test_audio_payload_rejects_truncated_frames() {
        assert_eq!(audio_payload(&[]), None);
        assert_eq!(audio_payload(&[0]), None);
        // Declared header longer than the frame itself.
        assert_eq!(audio_payload(&[0xff, 0xff, b'x']), None);
    }

    #[test]
    fn test_connection_url_carries_tokens() {
        let url = connection_url();
        assert!(url.starts_with("wss://speech.platform.bing.com/"));
        assert!(url.contains("TrustedClientToken="));
        assert!(url.contains("Sec-MS-GEC="));
        assert!(url.contains("ConnectionId="));
    }
}
