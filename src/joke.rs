//! Joke API client.
//!
//! This module provides:
//!
//! - `JokeClient`: HTTP client wrapper for a random-joke endpoint
//! - `Joke`: the deserialized `{ "setup", "punchline" }` response body
//! - `JokeError`: what went wrong on a failed fetch
//!
//! The error variants are kept apart for logging and the CLI. The joke widget
//! deliberately collapses all of them into one fixed message.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_data::app_data;

/// User agent for API requests
const USER_AGENT: &str = concat!("DevNotes/", env!("CARGO_PKG_VERSION"));

/// A joke as returned by the API. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Setup and punchline joined for display
    pub fn display(&self) -> String {
        format!(
            "{}{}{}",
            self.setup,
            app_data().joke.separator,
            self.punchline
        )
    }
}

/// Errors that can occur while fetching a joke
#[derive(Error, Debug)]
pub enum JokeError {
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Joke API returned HTTP {0}")]
    Status(u16),

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Joke API client
#[derive(Clone)]
pub struct JokeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl JokeClient {
    /// Create a client for `endpoint`, with an optional request timeout.
    ///
    /// Without a timeout the reqwest default applies.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one random joke
    pub async fn fetch_joke(&self) -> Result<Joke, JokeError> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(JokeError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JokeError::Status(status.as_u16()));
        }

        let joke: Joke = response.json().await.map_err(JokeError::Decode)?;
        tracing::debug!(
            "Fetched joke from {} in {:.2}s",
            self.endpoint,
            start.elapsed().as_secs_f32()
        );

        Ok(joke)
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal one-shot HTTP responder for exercising the client offline.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status` and `body` to every connection. Returns the endpoint URL.
    pub async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/random_joke", addr)
    }

    /// An endpoint nothing is listening on
    pub async fn refused() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/random_joke", addr)
    }
}
