use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};
use crate::types::run::{RunObject, RunToolCall};
use crate::types::RunStatus;

/// Run stream reduced to the events the orchestration layer cares about.
/// Only `TextDelta` carries user-visible output; everything else is
/// lifecycle bookkeeping consumed internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunStreamEvent {
    TextDelta {
        content: String,
    },

    RunUpdate {
        event: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<RunStatus>,
    },

    RequiresAction {
        run_id: String,
        tool_calls: Vec<RunToolCall>,
    },

    Failed {
        reason: String,
    },

    Done,
}

// Wire shape of `thread.message.delta` payloads.

#[derive(Debug, Clone, Deserialize)]
struct MessageDeltaEvent {
    #[allow(dead_code)]
    id: String,
    delta: MessageDelta,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageDelta {
    #[serde(default)]
    content: Option<Vec<DeltaContent>>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeltaContent {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<DeltaText>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeltaText {
    #[serde(default)]
    value: Option<String>,
}

/// Decode one SSE `event:`/`data:` pair into a stream event.
///
/// Returns `Ok(None)` for protocol events that carry nothing this layer
/// needs (step events, message lifecycle notifications, and so on).
pub fn decode_run_event(event: &str, data: &str) -> Result<Option<RunStreamEvent>> {
    if data == "[DONE]" || event == "done" {
        return Ok(Some(RunStreamEvent::Done));
    }

    match event {
        "thread.message.delta" => {
            let payload: MessageDeltaEvent = serde_json::from_str(data)?;
            let mut content = String::new();
            if let Some(parts) = payload.delta.content {
                for part in parts {
                    if part.kind == "text" {
                        if let Some(value) = part.text.and_then(|t| t.value) {
                            content.push_str(&value);
                        }
                    }
                }
            }
            if content.is_empty() {
                Ok(None)
            } else {
                Ok(Some(RunStreamEvent::TextDelta { content }))
            }
        }
        "thread.run.requires_action" => {
            let run: RunObject = serde_json::from_str(data)?;
            let tool_calls = run
                .required_action
                .map(|action| action.submit_tool_outputs.tool_calls)
                .unwrap_or_default();
            Ok(Some(RunStreamEvent::RequiresAction {
                run_id: run.id,
                tool_calls,
            }))
        }
        "thread.run.failed" | "thread.run.cancelled" | "thread.run.expired" => {
            let run: RunObject = serde_json::from_str(data)?;
            let reason = run
                .last_error
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or_else(|| event.to_string());
            Ok(Some(RunStreamEvent::Failed { reason }))
        }
        "error" => Ok(Some(RunStreamEvent::Failed {
            reason: data.to_string(),
        })),
        _ if event.starts_with("thread.run.step") => Ok(None),
        _ if event.starts_with("thread.run") => {
            let run: RunObject = serde_json::from_str(data)?;
            Ok(Some(RunStreamEvent::RunUpdate {
                event: event.to_string(),
                status: Some(run.status),
            }))
        }
        _ => Ok(None),
    }
}

/// Decode an SSE response body into run stream events, in arrival order.
///
/// The stream is lazy: bytes are pulled from the connection only as the
/// consumer polls, so a slow consumer throttles the upstream read. A
/// transport error ends the stream after being yielded; already-yielded
/// events stand.
pub fn parse_run_sse_stream(
    response: Response,
) -> Pin<Box<dyn Stream<Item = Result<RunStreamEvent>> + Send>> {
    let stream = response.bytes_stream();

    Box::pin(async_stream::stream! {
        let mut byte_chunks = Box::pin(stream);
        let mut buffer = VecDeque::with_capacity(8192);
        let mut event_name = String::new();

        'outer: while let Some(chunk_result) = byte_chunks.next().await {
            match chunk_result {
                Ok(bytes) => {
                    buffer.extend(bytes);

                    while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                        let line_bytes: Vec<u8> = buffer.drain(..=newline_pos).collect();

                        if let Ok(line_str) = std::str::from_utf8(&line_bytes) {
                            let line = line_str.trim();

                            if line.is_empty() {
                                event_name.clear();
                                continue;
                            }

                            if let Some(name) = line.strip_prefix("event: ") {
                                event_name = name.to_string();
                                continue;
                            }

                            if let Some(data) = line.strip_prefix("data: ") {
                                match decode_run_event(&event_name, data) {
                                    Ok(Some(RunStreamEvent::Done)) => {
                                        yield Ok(RunStreamEvent::Done);
                                        break 'outer;
                                    }
                                    Ok(Some(event)) => yield Ok(event),
                                    Ok(None) => {}
                                    Err(e) => yield Err(e),
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    yield Err(AssistantError::Transport(e));
                    break;
                }
            }
        }
    })
}
