//! Reconciled local state and the mutation entry points that act on it.
//!
//! [`MonitorState`] is the single owner of everything the views read: the
//! latest job snapshots, the execution history, the acknowledged-error set
//! and the navigation/selection state. The poller and user actions mutate it
//! through dedicated methods while holding the write lock, so every mutation
//! is atomic with respect to readers and data flows one way.

pub mod acks;
pub mod grid;
pub mod nav;

use crate::config::MonitorConfig;
use crate::model::{Execution, JobSnapshot};
use crate::sync::ExecutionStore;

pub use acks::ErrorAckTracker;
pub use nav::{Section, Selection, ViewState};

#[derive(Debug)]
pub struct MonitorState {
    config: MonitorConfig,
    jobs: Vec<JobSnapshot>,
    executions: ExecutionStore,
    acks: ErrorAckTracker,
    view: ViewState,
}

impl MonitorState {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            jobs: Vec::new(),
            executions: ExecutionStore::new(),
            acks: ErrorAckTracker::new(),
            view: ViewState::default(),
        }
    }

    // ------------------------------------------------------------------
    // Poll-side entry points
    // ------------------------------------------------------------------

    /// Publish a fresh set of job snapshots. Replaces the cached list
    /// wholesale, sorted by name for presentation, and re-validates the
    /// acknowledged-error set against the new truth.
    pub fn apply_jobs(&mut self, mut jobs: Vec<JobSnapshot>) {
        jobs.sort_by(|a, b| a.name.cmp(&b.name));
        self.jobs = jobs;
        self.acks.revalidate(&self.jobs);
    }

    /// Publish a fresh execution collection and let a pending auto-open
    /// target consume it.
    pub fn apply_executions(&mut self, executions: Vec<Execution>) {
        self.executions.replace(executions);
        self.consume_pending_open();
    }

    // ------------------------------------------------------------------
    // User-side entry points
    // ------------------------------------------------------------------

    /// The user clicked a job's error affordance on the status board.
    ///
    /// Marks the error acknowledged, switches to the log browser and records
    /// the job as the pending auto-open target. No-op when the job has no
    /// current error (the affordance should not have been clickable).
    pub fn acknowledge_error(&mut self, name: &str) -> bool {
        let has_error = self.jobs.iter().any(|j| j.name == name && j.has_error());
        if !has_error {
            return false;
        }

        self.acks.acknowledge(name);
        self.view.section = Section::LogBrowser;
        self.view.pending_open = Some(name.to_string());
        self.consume_pending_open();
        true
    }

    /// Best-effort one-shot match of the pending auto-open target.
    ///
    /// Waits until the execution collection is non-empty, then picks the
    /// most recently started failed execution for the target job. Whether or
    /// not a match exists, the target is cleared so it cannot re-fire on
    /// later unrelated updates.
    fn consume_pending_open(&mut self) {
        if self.executions.is_empty() {
            return;
        }
        let Some(name) = self.view.pending_open.take() else {
            return;
        };
        if let Some(exec) = self.executions.latest_failed_for(&name) {
            self.view.selection = Selection::Open(exec.id.clone());
        }
    }

    /// Toggle an execution's detail card.
    ///
    /// Toggling the open card starts the closing animation; toggling another
    /// card swaps the detail immediately. In-flight executions are not
    /// selectable. Returns false when the toggle was ignored.
    pub fn toggle_execution(&mut self, id: &str) -> bool {
        let Some(exec) = self.executions.get(id) else {
            return false;
        };
        if exec.is_running() {
            return false;
        }

        self.view.selection = match &self.view.selection {
            Selection::Open(open) if open == id => Selection::Closing(id.to_string()),
            Selection::Closing(closing) if closing == id => Selection::Closing(id.to_string()),
            _ => Selection::Open(id.to_string()),
        };
        true
    }

    /// Remove a closing detail card from the tree. Invoked by the owner once
    /// the closing-animation delay has elapsed; ignored if the selection
    /// moved on in the meantime.
    pub fn finish_close(&mut self, id: &str) {
        if matches!(&self.view.selection, Selection::Closing(closing) if closing == id) {
            self.view.selection = Selection::None;
        }
    }

    /// Switch the active view. Leaving the log browser abandons any pending
    /// auto-open target.
    pub fn set_section(&mut self, section: Section) {
        self.view.section = section;
        if section != Section::LogBrowser {
            self.view.pending_open = None;
        }
    }

    /// Recompute the grid column count for a new container width.
    pub fn set_container_width(&mut self, width: u32) {
        self.view.columns =
            grid::column_count(width, self.config.min_card_width, self.config.card_gap);
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn jobs(&self) -> &[JobSnapshot] {
        &self.jobs
    }

    pub fn job(&self, name: &str) -> Option<&JobSnapshot> {
        self.jobs.iter().find(|j| j.name == name)
    }

    pub fn executions(&self) -> &ExecutionStore {
        &self.executions
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// True while the job has an error the user has not navigated to yet.
    /// Acknowledged errors stay clickable but are not re-surfaced as new.
    pub fn has_new_error(&self, name: &str) -> bool {
        self.job(name).is_some_and(|j| j.has_error()) && !self.acks.is_acknowledged(name)
    }

    pub fn is_error_acknowledged(&self, name: &str) -> bool {
        self.acks.is_acknowledged(name)
    }

    /// Whether a job should render as executing. Trusts the derived running
    /// index as well as the snapshot flag, so cards stay annotated even when
    /// the snapshot lags behind the execution feed.
    pub fn job_is_executing(&self, name: &str) -> bool {
        self.job(name).is_some_and(|j| j.is_executing) || self.executions.is_executing(name)
    }

    /// Index at which the expanded detail card renders, if a card is in the
    /// tree and its execution is still part of the collection.
    pub fn detail_insertion_index(&self) -> Option<usize> {
        let id = self.view.selection.open_id()?;
        let selected = self.executions.index_of(id)?;
        Some(grid::insertion_index(
            selected,
            self.view.columns,
            self.executions.len(),
        ))
    }
}
