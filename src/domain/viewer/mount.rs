use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::interests_client::{FetchError, InterestsClient};
use super::view_state::ViewState;

type FetchOutcome = Result<Vec<String>, FetchError>;

/// One mounted viewer instance.
///
/// Mounting spawns the single fetch; the outcome arrives on a oneshot
/// channel and is applied by [`Viewer::settle`]. There is no cancellation
/// handle and no timeout.
pub struct Viewer {
    state: ViewState,
    outcome: oneshot::Receiver<FetchOutcome>,
}

impl Viewer {
    pub fn mount(client: Arc<dyn InterestsClient>) -> Self {
        let mut state = ViewState::default();
        state.begin_loading();

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = client.fetch_interests().await;
            if tx.send(outcome).is_err() {
                debug!("Viewer dropped before interests fetch completed");
            }
        });

        Self { state, outcome: rx }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Waits for the fetch and returns the settled view state.
    pub async fn settle(mut self) -> ViewState {
        let outcome = match self.outcome.await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("Interests fetch task ended without a result");
                Err(FetchError::Unknown)
            }
        };

        if let Err(err) = &outcome {
            warn!(error = %err, "Failed to fetch interests");
        }

        self.state.apply(outcome);
        self.state
    }
}
