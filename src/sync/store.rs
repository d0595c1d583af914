use std::collections::HashMap;

use crate::model::{Execution, ExecutionStatus};

/// Holds the full known execution history plus a derived index of the
/// canonical running execution per job.
///
/// The provider guarantees at most one running execution per job, but stale
/// reads can transiently show duplicates. The index is rebuilt from scratch
/// on every replacement and always resolves to the running execution with
/// the latest start time, so readers never have to care.
#[derive(Debug, Default)]
pub struct ExecutionStore {
    /// Sorted by start time, most recent first.
    executions: Vec<Execution>,
    /// job name -> id of its canonical running execution.
    running_by_job: HashMap<String, String>,
}

impl ExecutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. No incremental merge: the provider's
    /// response is the truth as of this tick.
    pub fn replace(&mut self, mut executions: Vec<Execution>) {
        executions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        self.executions = executions;
        self.rebuild_running_index();
    }

    fn rebuild_running_index(&mut self) {
        self.running_by_job.clear();
        // Most-recent-first order means the first running execution seen for
        // a job is the canonical one.
        for exec in &self.executions {
            if exec.status == ExecutionStatus::Running {
                self.running_by_job
                    .entry(exec.job_name.clone())
                    .or_insert_with(|| exec.id.clone());
            }
        }
    }

    pub fn all(&self) -> &[Execution] {
        &self.executions
    }

    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Execution> {
        self.executions.iter().find(|e| e.id == id)
    }

    /// Position of an execution in the rendered (most-recent-first) order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.executions.iter().position(|e| e.id == id)
    }

    /// The canonical in-flight execution for a job, if any.
    pub fn current_for(&self, job_name: &str) -> Option<&Execution> {
        let id = self.running_by_job.get(job_name)?;
        self.get(id)
    }

    pub fn is_executing(&self, job_name: &str) -> bool {
        self.running_by_job.contains_key(job_name)
    }

    /// The most recently started failed execution for a job.
    pub fn latest_failed_for(&self, job_name: &str) -> Option<&Execution> {
        self.executions
            .iter()
            .find(|e| e.job_name == job_name && e.status == ExecutionStatus::Failed)
    }
}
