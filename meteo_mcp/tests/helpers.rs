//! Shared test helpers for meteo_mcp tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use meteo_core::{Endpoints, Fetch, MeteoError, OpenMeteoClient, QueryParameters};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

/// What the fake upstream answers.
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
}

/// A [`Fetch`] that records every request and answers with a fixed reply.
pub struct RecordingFetcher {
    reply: Reply,
    calls: Mutex<Vec<(String, QueryParameters)>>,
}

impl RecordingFetcher {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The (base URL, parameters) of every request made so far.
    pub fn calls(&self) -> Vec<(String, QueryParameters)> {
        self.calls.lock().unwrap().clone()
    }

    /// The only request made; panics unless exactly one was made.
    pub fn single_call(&self) -> (String, QueryParameters) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "Expected exactly one upstream request");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Fetch for RecordingFetcher {
    async fn get_json(&self, base: &str, params: &QueryParameters) -> Result<Value, MeteoError> {
        self.calls
            .lock()
            .unwrap()
            .push((base.to_string(), params.clone()));
        match &self.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(MeteoError::UpstreamStatus {
                status: *status,
                body: body.to_string(),
            }),
        }
    }
}

/// A client over the public endpoints whose upstream always answers `reply`.
pub fn client(reply: Reply) -> OpenMeteoClient<RecordingFetcher> {
    OpenMeteoClient::new(RecordingFetcher::new(reply), Endpoints::default())
}

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the JSON payload of a successful CallToolResult.
pub fn get_json(result: &CallToolResult) -> Value {
    serde_json::from_str(&get_text(result)).expect("Expected JSON content")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
