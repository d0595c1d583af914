//! The remote Jobs/Executions provider contract.
//!
//! The monitor only ever observes the scheduler through this trait: two
//! side-effect-free reads polled every tick, two fire-and-forget job actions
//! whose outcome is observed via later polls, and full-object settings
//! load/replace.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Execution, JobSnapshot};
use crate::settings::Settings;

pub use http::HttpProvider;

#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Snapshot of every known job. Must tolerate being called at 1 Hz
    /// indefinitely.
    async fn list_jobs(&self) -> Result<Vec<JobSnapshot>>;

    /// Full execution history the provider currently retains.
    async fn list_executions(&self) -> Result<Vec<Execution>>;

    /// Request an out-of-band run. Success or failure shows up in later
    /// snapshots, not in the reply.
    async fn trigger(&self, name: &str) -> Result<()>;

    /// Optional server-side error acknowledgment. The local tracker works
    /// without it: the canonical clear signal is the snapshot's `err` field
    /// going empty on a later poll.
    async fn clear_error(&self, name: &str) -> Result<()>;

    async fn load_settings(&self) -> Result<Settings>;

    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}
