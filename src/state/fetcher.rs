//! Joke widget state

use chrono::{DateTime, Local};
use eframe::egui;
use tokio::task::{JoinError, JoinHandle};

use crate::app_data::app_data;
use crate::joke::{Joke, JokeClient, JokeError};
use crate::state::StateEvent;
use crate::task::{abort_task, poll_task, PollResult};

/// Where the joke widget currently is. Exactly one phase holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing requested yet, or the last result was cleared
    #[default]
    Idle,
    /// A request is outstanding
    Loading,
    /// Formatted joke text
    Resolved(String),
    /// Fixed user-facing failure text
    Failed(String),
}

/// Joke widget state
pub struct FetcherState {
    client: JokeClient,
    /// Current phase
    pub phase: FetchPhase,
    /// When the displayed joke arrived
    pub fetched_at: Option<DateTime<Local>>,
    /// Async task for the outstanding request
    task: Option<JoinHandle<Result<Joke, JokeError>>>,
}

impl FetcherState {
    pub fn new(client: JokeClient) -> Self {
        Self {
            client,
            phase: FetchPhase::Idle,
            fetched_at: None,
            task: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Endpoint requests go to
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Swap the client used for later requests. An outstanding request is left alone.
    pub fn set_client(&mut self, client: JokeClient) {
        self.client = client;
    }

    /// Start fetching a joke. Must be called from within the tokio runtime.
    ///
    /// Returns false (and does nothing) while a request is already outstanding.
    pub fn fetch(&mut self) -> bool {
        if self.is_loading() {
            tracing::debug!("Ignoring joke fetch while one is in flight");
            return false;
        }

        self.phase = FetchPhase::Loading;
        self.fetched_at = None;

        let client = self.client.clone();
        self.task = Some(tokio::spawn(async move { client.fetch_joke().await }));
        true
    }

    /// Abort the outstanding request, if any, and return to idle
    pub fn cancel(&mut self) {
        if abort_task(&mut self.task) {
            tracing::info!("Cancelled joke request");
        }
        if self.is_loading() {
            self.phase = FetchPhase::Idle;
        }
    }

    /// Clear a settled result
    pub fn clear(&mut self) {
        if !self.is_loading() {
            self.phase = FetchPhase::Idle;
            self.fetched_at = None;
        }
    }

    /// Poll the outstanding request for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        match poll_task(&mut self.task) {
            PollResult::Complete(result) => self.settle(result),
            PollResult::Pending => {
                ctx.request_repaint();
                Vec::new()
            }
            PollResult::NoTask => Vec::new(),
        }
    }

    /// Leave `Loading` with the outcome of a finished request.
    ///
    /// Every outcome replaces the phase, so `Loading` never outlives the task.
    fn settle(&mut self, result: Result<Result<Joke, JokeError>, JoinError>) -> Vec<StateEvent> {
        let failure = match result {
            Ok(Ok(joke)) => {
                let text = joke.display();
                self.phase = FetchPhase::Resolved(text);
                self.fetched_at = Some(Local::now());
                return vec![
                    StateEvent::LogInfo("Fetched a joke".to_string()),
                    StateEvent::StatusMessage("Joke loaded".to_string()),
                ];
            }
            Ok(Err(e)) => format!("Joke request failed: {}", e),
            Err(e) if e.is_cancelled() => {
                self.phase = FetchPhase::Idle;
                return Vec::new();
            }
            Err(e) => format!("Joke task panicked: {}", e),
        };

        tracing::warn!("{}", failure);
        self.phase = FetchPhase::Failed(app_data().joke.failure_message.clone());
        vec![
            StateEvent::LogError(failure),
            StateEvent::StatusMessage("Could not load a joke".to_string()),
        ]
    }
}

impl Drop for FetcherState {
    fn drop(&mut self) {
        abort_task(&mut self.task);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::joke::test_server::{refused, serve};

    async fn settle_fetch(state: &mut FetcherState) -> Vec<StateEvent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        for _ in 0..500 {
            events.extend(state.poll(&ctx));
            if !state.is_loading() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        events
    }

    fn state_for(url: String) -> FetcherState {
        FetcherState::new(JokeClient::new(url, Some(Duration::from_secs(5))).unwrap())
    }

    async fn explode() -> Result<Joke, JokeError> {
        panic!("boom")
    }

    fn failure_message() -> FetchPhase {
        FetchPhase::Failed(app_data().joke.failure_message.clone())
    }

    #[tokio::test]
    async fn test_fetch_resolves_formatted_joke() {
        let url = serve(
            "200 OK",
            r#"{"setup":"Why did the chicken cross the road?","punchline":"To get to the other side."}"#,
        )
        .await;
        let mut state = state_for(url);
        assert_eq!(state.phase, FetchPhase::Idle);

        assert!(state.fetch());
        assert!(state.is_loading());

        let events = settle_fetch(&mut state).await;
        assert_eq!(
            state.phase,
            FetchPhase::Resolved(
                "Why did the chicken cross the road? - To get to the other side.".to_string()
            )
        );
        assert!(state.fetched_at.is_some());
        assert!(events.contains(&StateEvent::StatusMessage("Joke loaded".to_string())));
    }

    #[tokio::test]
    async fn test_every_failure_shows_the_same_message() {
        let urls = vec![
            refused().await,
            serve("500 Internal Server Error", r#"{"message":"internal"}"#).await,
            serve("200 OK", "{not json").await,
            serve("200 OK", r#"{"punchline":"no setup"}"#).await,
        ];

        for url in urls {
            let mut state = state_for(url);
            state.fetch();
            let events = settle_fetch(&mut state).await;

            assert!(!state.is_loading());
            assert_eq!(state.phase, failure_message());
            assert!(events.iter().any(|e| matches!(e, StateEvent::LogError(_))));
        }
    }

    #[tokio::test]
    async fn test_fetch_ignored_while_loading() {
        let mut state = state_for(serve("200 OK", r#"{"setup":"a","punchline":"b"}"#).await);
        assert!(state.fetch());
        assert!(!state.fetch());

        settle_fetch(&mut state).await;
        assert_eq!(state.phase, FetchPhase::Resolved("a - b".to_string()));

        assert!(state.fetch());
        settle_fetch(&mut state).await;
        assert!(!state.is_loading());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_many_fetches_from_a_loop_that_never_yields() {
        // Mirrors the UI thread: poll once per frame and sleep, never .await
        let mut state = state_for(serve("200 OK", r#"{"setup":"a","punchline":"b"}"#).await);
        let ctx = egui::Context::default();

        for n in 1..=200 {
            assert!(state.fetch(), "fetch #{} was refused", n);
            for _ in 0..500 {
                state.poll(&ctx);
                if !state.is_loading() {
                    break;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
            assert_eq!(
                state.phase,
                FetchPhase::Resolved("a - b".to_string()),
                "fetch #{} did not settle",
                n
            );
        }
    }

    #[tokio::test]
    async fn test_cancel_returns_to_idle() {
        let mut state = state_for(serve("200 OK", r#"{"setup":"a","punchline":"b"}"#).await);
        state.fetch();
        state.cancel();

        assert_eq!(state.phase, FetchPhase::Idle);
        assert!(state.task.is_none());
        assert!(state.poll(&egui::Context::default()).is_empty());
    }

    #[tokio::test]
    async fn test_panicked_task_leaves_loading() {
        let mut state = state_for(refused().await);
        state.phase = FetchPhase::Loading;
        state.task = Some(tokio::spawn(explode()));

        settle_fetch(&mut state).await;
        assert_eq!(state.phase, failure_message());
    }

    #[tokio::test]
    async fn test_clear_only_settled_results() {
        let mut state = state_for(refused().await);
        state.phase = FetchPhase::Resolved("a - b".to_string());
        state.clear();
        assert_eq!(state.phase, FetchPhase::Idle);

        state.phase = FetchPhase::Loading;
        state.clear();
        assert_eq!(state.phase, FetchPhase::Loading);
    }
}
