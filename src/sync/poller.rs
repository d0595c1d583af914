use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::provider::JobProvider;
use crate::view::MonitorState;

/// Timer-driven loop that pulls job snapshots and execution records and
/// republishes them into [`MonitorState`].
///
/// Both fetches run every tick regardless of previous outcomes. A failure in
/// one never aborts the other and never propagates to the caller: the stale
/// collection is kept and the fetch retried next tick, with no backoff. A
/// slow tick delays the next visible update rather than queueing.
pub struct Poller {
    provider: Arc<dyn JobProvider>,
    state: Arc<RwLock<MonitorState>>,
    interval: Duration,
}

impl Poller {
    pub fn new(
        provider: Arc<dyn JobProvider>,
        state: Arc<RwLock<MonitorState>>,
        interval: Duration,
    ) -> Self {
        Self {
            provider,
            state,
            interval,
        }
    }

    /// Run until `shutdown` fires. The first tick happens immediately.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(interval_ms = self.interval.as_millis() as u64, "Poller started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
    }

    /// One poll cycle: fetch jobs and executions concurrently, then publish
    /// whichever succeeded.
    pub async fn tick(&self) {
        let (jobs, executions) = tokio::join!(
            self.provider.list_jobs(),
            self.provider.list_executions()
        );

        let mut state = self.state.write().await;

        match jobs {
            Ok(jobs) => state.apply_jobs(jobs),
            Err(e) => {
                tracing::debug!(error = %e, "Job fetch failed, keeping previous snapshots");
            }
        }

        match executions {
            Ok(executions) => state.apply_executions(executions),
            Err(e) => {
                tracing::debug!(error = %e, "Execution fetch failed, keeping previous history");
            }
        }
    }
}
