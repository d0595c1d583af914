use std::collections::HashSet;

use crate::model::JobSnapshot;

/// Tracks which jobs' errors the user has already seen.
///
/// Per-job lifecycle: clean -> errored (snapshot `err` goes non-empty) ->
/// acknowledged (user navigates to the error) -> clean (snapshot `err` goes
/// empty again). The set is process-lifetime only and is re-validated on
/// every poll tick, so it can never outlive the error it refers to.
#[derive(Debug, Default)]
pub struct ErrorAckTracker {
    acknowledged: HashSet<String>,
}

impl ErrorAckTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acknowledge(&mut self, name: &str) {
        self.acknowledged.insert(name.to_string());
    }

    pub fn is_acknowledged(&self, name: &str) -> bool {
        self.acknowledged.contains(name)
    }

    /// Drop every name whose current snapshot reports no error (or whose
    /// snapshot is gone), regardless of acknowledgment state.
    pub fn revalidate(&mut self, jobs: &[JobSnapshot]) {
        self.acknowledged
            .retain(|name| jobs.iter().any(|j| j.name == *name && j.has_error()));
    }

    pub fn len(&self) -> usize {
        self.acknowledged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acknowledged.is_empty()
    }
}
