use super::interests_client::FetchError;

/// Lifecycle of one mounted viewer: `Idle → Loading → {Loaded | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Per-instance view state. Starts empty, is settled by exactly one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub entries: Vec<String>,
    pub error: Option<String>,
    phase: ViewPhase,
}

impl ViewState {
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub(crate) fn begin_loading(&mut self) {
        if self.phase == ViewPhase::Idle {
            self.phase = ViewPhase::Loading;
        }
    }

    /// Applies the fetch outcome. Only the first outcome after loading
    /// started has any effect.
    pub(crate) fn apply(&mut self, outcome: Result<Vec<String>, FetchError>) {
        if self.phase != ViewPhase::Loading {
            return;
        }

        match outcome {
            Ok(entries) => {
                self.entries = entries;
                self.phase = ViewPhase::Loaded;
            }
            Err(err) => {
                self.error = Some(err.message());
                self.phase = ViewPhase::Failed;
            }
        }
    }
}
