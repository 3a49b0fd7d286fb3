//! HTTP client for communicating with the question-bank API

use crate::cursor::{Cursor, PAGE_SIZE};
use quizbank_core::config::BackendConfig;
use quizbank_core::{
    Error, OptionKey, QuestionPage, Result, RevertSummary, StatsSnapshot, UploadRecord,
    UploadSummary,
};
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// API client for making HTTP requests to the question-bank backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct UploadBody<'a> {
    html: &'a str,
    score: &'a str,
}

#[derive(Serialize)]
struct CorrectOptionBody {
    option: OptionKey,
}

#[derive(Serialize)]
struct ScoreBody<'a> {
    score: &'a str,
}

#[derive(Deserialize)]
struct ScoreReply {
    #[serde(default)]
    score: Option<f64>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the backend section of the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(backend: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = backend.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: backend.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get aggregate statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_stats(&self) -> Result<StatsSnapshot> {
        let url = format!("{}/api/stats", self.base_url);
        fetch_json(self.client.get(&url), "stats").await
    }

    /// Submit pasted HTML for server-side question extraction
    ///
    /// # Errors
    ///
    /// Returns the backend's message when it rejects the upload, or a
    /// transport error when it cannot be reached.
    pub async fn upload_html(&self, html: &str, score: &str) -> Result<UploadSummary> {
        let url = format!("{}/api/upload", self.base_url);
        let request = self.client.post(&url).json(&UploadBody { html, score });
        fetch_outcome(request, "upload").await
    }

    /// Get one page of questions for the given cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_questions(&self, cursor: &Cursor) -> Result<QuestionPage> {
        let mut url = format!(
            "{}/api/questions?page={}&size={PAGE_SIZE}",
            self.base_url, cursor.page
        );
        if cursor.has_search() {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(&cursor.search));
        }

        fetch_json(self.client.get(&url), "questions").await
    }

    /// Mark `option` as the only correct answer of a question
    ///
    /// # Errors
    ///
    /// Returns the backend's message when it rejects the change, or a
    /// transport error when it cannot be reached.
    pub async fn set_correct_option(&self, question_id: i64, option: OptionKey) -> Result<()> {
        let url = format!("{}/api/questions/{question_id}/correct", self.base_url);
        let request = self.client.post(&url).json(&CorrectOptionBody { option });
        fetch_outcome::<IgnoredAny>(request, "correct option").await?;
        Ok(())
    }

    /// Delete a question
    ///
    /// # Errors
    ///
    /// Returns the backend's message when it rejects the deletion, or a
    /// transport error when it cannot be reached.
    pub async fn delete_question(&self, question_id: i64) -> Result<()> {
        let url = format!("{}/api/questions/{question_id}", self.base_url);
        fetch_outcome::<IgnoredAny>(self.client.delete(&url), "question deletion").await?;
        Ok(())
    }

    /// Get the upload log, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_history(&self) -> Result<Vec<UploadRecord>> {
        let url = format!("{}/api/history", self.base_url);
        fetch_json(self.client.get(&url), "history").await
    }

    /// Delete an upload record and revert everything it changed
    ///
    /// # Errors
    ///
    /// Returns the backend's message when it rejects the deletion, or a
    /// transport error when it cannot be reached.
    pub async fn delete_history(&self, log_id: i64) -> Result<RevertSummary> {
        let url = format!("{}/api/history/{log_id}", self.base_url);
        fetch_outcome(self.client.delete(&url), "history deletion").await
    }

    /// Change or clear (empty string) the score of an upload record
    ///
    /// # Errors
    ///
    /// Returns the backend's message when it rejects the score, or a
    /// transport error when it cannot be reached.
    pub async fn update_upload_score(&self, log_id: i64, score: &str) -> Result<Option<f64>> {
        let url = format!("{}/api/history/{log_id}/score", self.base_url);
        let request = self.client.put(&url).json(&ScoreBody { score });
        let reply: ScoreReply = fetch_outcome(request, "score update").await?;
        Ok(reply.score)
    }

    /// Export the whole question bank
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn export(&self) -> Result<serde_json::Value> {
        let url = format!("{}/api/export", self.base_url);
        fetch_json(self.client.get(&url), "export").await
    }
}

/// Send a request whose success body is the payload itself
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T> {
    debug!(what, "querying backend");

    let response = request
        .send()
        .await
        .map_err(|e| Error::Transport(format!("Failed to fetch {what}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Transport(format!(
            "API returned error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| Error::Decode(format!("{what}: {e}")))
}

/// Send a request answered with a `{"success": bool, "error": ...}` envelope
///
/// The envelope is decoded regardless of the HTTP status: the backend reports
/// rejected input with 400/404 and still includes its message.
async fn fetch_outcome<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T> {
    debug!(what, "calling backend");

    let response = request
        .send()
        .await
        .map_err(|e| Error::Transport(format!("Failed to send {what} request: {e}")))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Transport(format!("Failed to read {what} response: {e}")))?;

    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        if status.is_success() {
            Error::Decode(format!("{what}: {e}"))
        } else {
            Error::Transport(format!("API returned error: {status}"))
        }
    })?;

    let success = value
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || format!("The backend rejected the {what} request ({status})"),
                ToString::to_string,
            );
        return Err(Error::Api(message));
    }

    Ok(serde_json::from_value(value)?)
}
