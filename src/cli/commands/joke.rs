//! Random joke command

use anyhow::Result;
use serde::Serialize;

use crate::app_data::app_data;
use crate::cli::output::{print_formatted, OutputFormat};
use crate::config::Config;
use crate::joke::JokeClient;

#[derive(Debug, Serialize)]
struct JokeResult {
    setup: String,
    punchline: String,
    text: String,
}

pub async fn run(format: OutputFormat, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let client = JokeClient::new(config.joke.endpoint.clone(), config.joke.timeout())?;

    if verbose {
        eprintln!("Fetching from {}", client.endpoint());
    }

    let result = fetch(&client).await?;
    print_formatted(&result, format, |r| r.text.clone());

    Ok(())
}

/// Fetch one joke. On failure the top-level message is the fixed failure text
/// and the cause is only visible with alternate formatting (`{:#}`).
async fn fetch(client: &JokeClient) -> Result<JokeResult> {
    let joke = match client.fetch_joke().await {
        Ok(joke) => joke,
        Err(e) => {
            tracing::warn!("Joke request failed: {}", e);
            return Err(anyhow::Error::new(e).context(app_data().joke.failure_message.clone()));
        }
    };

    Ok(JokeResult {
        text: joke.display(),
        setup: joke.setup,
        punchline: joke.punchline,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::joke::test_server::{refused, serve};

    fn client_for(url: String) -> JokeClient {
        JokeClient::new(url, Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_formats_joke() {
        let client = client_for(serve("200 OK", r#"{"setup":"a","punchline":"b"}"#).await);

        let result = fetch(&client).await.unwrap();
        assert_eq!(result.text, "a - b");
        assert_eq!(result.setup, "a");
        assert_eq!(result.punchline, "b");
    }

    #[tokio::test]
    async fn test_fetch_failure_hides_cause_unless_alternate() {
        let failure = &app_data().joke.failure_message;
        let cases = vec![
            (refused().await, "Request failed"),
            (
                serve("500 Internal Server Error", r#"{"message":"internal"}"#).await,
                "HTTP 500",
            ),
        ];

        for (url, cause) in cases {
            let e = fetch(&client_for(url)).await.unwrap_err();
            assert_eq!(&e.to_string(), failure);

            let verbose = format!("{:#}", e);
            assert!(verbose.starts_with(failure.as_str()), "{}", verbose);
            assert!(verbose.contains(cause), "{}", verbose);
        }
    }
}
