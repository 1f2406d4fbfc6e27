//! Mock provider for testing without API access.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::DepartureSet;

use super::DepartureProvider;
use super::error::ProviderError;

/// A provider serving a scripted sequence of results.
///
/// Each `fetch` pops the next scripted outcome; once the script runs out,
/// the last successful set (or an error) is repeated. Useful for driving
/// the poller through load/fail/recover transitions in tests.
pub struct MockProvider {
    script: Mutex<VecDeque<Result<DepartureSet, String>>>,
    fallback: Result<DepartureSet, String>,
}

impl MockProvider {
    /// Always serve the same departure set.
    pub fn serving(set: DepartureSet) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(set),
        }
    }

    /// Always fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(message.into()),
        }
    }

    /// Serve the scripted outcomes in order, then repeat the last one.
    pub fn scripted(outcomes: Vec<Result<DepartureSet, String>>) -> Self {
        let fallback = outcomes
            .last()
            .cloned()
            .unwrap_or_else(|| Ok(DepartureSet::new()));
        Self {
            script: Mutex::new(outcomes.into()),
            fallback,
        }
    }

    fn next_outcome(&self) -> Result<DepartureSet, String> {
        let mut script = self.script.lock().expect("mock script lock poisoned");
        script.pop_front().unwrap_or_else(|| self.fallback.clone())
    }
}

impl DepartureProvider for MockProvider {
    async fn fetch(&self) -> Result<DepartureSet, ProviderError> {
        self.next_outcome().map_err(|message| ProviderError::Api {
            status: 0,
            message,
        })
    }
}
