use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use thiserror::Error;

pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("webhook request failed: {0}")]
    Transport(String),
    #[error("webhook rejected submission with status {status}")]
    Rejected { status: u16 },
}

impl SubmissionError {
    /// Visitors get the same message whatever went wrong; the details are
    /// only logged.
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}

pub fn check_status(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Rejected { status })
    }
}

/// Posts a JSON body and hands back the response status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, String>;
}

/// `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(response.status())
    }
}

pub struct Webhook<T = BrowserTransport> {
    url: String,
    transport: T,
}

impl Webhook<BrowserTransport> {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_transport(url, BrowserTransport)
    }
}

impl<T: Transport> Webhook<T> {
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    /// One attempt, no retry. Any 2xx status counts as delivered.
    pub async fn deliver<P: Serialize>(&self, payload: &P) -> Result<(), SubmissionError> {
        let body = serde_json::to_string(payload)?;
        let status = self
            .transport
            .post_json(&self.url, body)
            .await
            .map_err(SubmissionError::Transport)?;
        info!("Webhook responded with status {}", status);
        check_status(status)
    }
}
