use async_trait::async_trait;
use cdktf_provider_project::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReleaseRegistry for testing that returns a fixed outcome
///
/// Every queried repository is recorded so tests can assert whether the
/// registry was consulted at all.
#[derive(Clone)]
pub struct MockReleaseRegistry {
    outcome: ReleaseQueryOutcome,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockReleaseRegistry {
    pub fn new(outcome: ReleaseQueryOutcome) -> Self {
        Self {
            outcome,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registry whose every query fails, as when `gh` is unavailable
    pub fn failing() -> Self {
        Self::new(ReleaseQueryOutcome::Failed(
            "gh: command not found".to_string(),
        ))
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseRegistry for MockReleaseRegistry {
    async fn query_major_v1_release(&self, repository: &RepositorySlug) -> ReleaseQueryOutcome {
        self.queries.lock().unwrap().push(repository.to_string());
        self.outcome.clone()
    }
}
