//! NDJSON fragment stream for the Ollama generate endpoint.
//!
//! The response body is one JSON object per line. HTTP chunk boundaries do
//! not align with lines, so bytes are buffered and only complete
//! newline-terminated lines are parsed; a partial line is carried until its
//! terminator arrives. The stream ends when a line carries `done: true` or
//! the body is exhausted (a trailing unterminated line is still parsed).

use async_stream::try_stream;
use futures_util::StreamExt;

use dagobah_core::gateway::FragmentStream;
use dagobah_types::gateway::GatewayError;

use super::types::{GenerateChunk, GenerateRequest};

/// POST the generate request and adapt its NDJSON body into a fragment
/// stream.
pub(super) fn create_generate_stream(
    client: reqwest::Client,
    url: String,
    body: GenerateRequest,
) -> FragmentStream {
    Box::pin(try_stream! {
        let response = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Connect(e.to_string()))?;

        let status = response.status();
        let response = if status.is_success() {
            response
        } else {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "generate request rejected");
            let rejected: Result<reqwest::Response, GatewayError> = Err(GatewayError::Http {
                status: status.as_u16(),
                body: error_body,
            });
            rejected?
        };

        let mut byte_stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut done = false;

        'body: while let Some(chunk_result) = byte_stream.next().await {
            let chunk = chunk_result
                .map_err(|e| GatewayError::Stream(format!("response body read: {e}")))?;
            buffer.extend_from_slice(&chunk);

            while let Some(line) = take_line(&mut buffer) {
                if let Some(parsed) = parse_line(&line)? {
                    if let Some(text) = parsed.response {
                        if !text.is_empty() {
                            yield text;
                        }
                    }
                    if parsed.done {
                        done = true;
                        break 'body;
                    }
                }
            }
        }

        // Body ended without a final newline; parse what remains.
        if !done && !buffer.is_empty() {
            let line = String::from_utf8_lossy(&buffer).into_owned();
            if let Some(parsed) = parse_line(&line)? {
                if let Some(text) = parsed.response {
                    if !text.is_empty() {
                        yield text;
                    }
                }
            }
        }
    })
}

/// Remove and return the next complete line from the buffer, without its
/// terminator. Returns `None` while no full line is available.
fn take_line(buffer: &mut Vec<u8>) -> Option<String> {
    let pos = buffer.iter().position(|&b| b == b'\n')?;
    let line: Vec<u8> = buffer.drain(..=pos).collect();
    let text = String::from_utf8_lossy(&line[..pos]);
    Some(text.trim_end_matches('\r').to_string())
}

/// Parse one NDJSON line. Blank lines are skipped; a line carrying only an
/// `error` field is the backend reporting a mid-generation failure.
fn parse_line(line: &str) -> Result<Option<GenerateChunk>, GatewayError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut chunk: GenerateChunk = serde_json::from_str(trimmed)
        .map_err(|e| GatewayError::Deserialization(format!("stream chunk: {e}")))?;

    if let Some(message) = chunk.error.take() {
        return Err(GatewayError::Stream(message));
    }
    Ok(Some(chunk))
}
