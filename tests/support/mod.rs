//! Shared fixtures for the integration tests: an in-memory provider with
//! scriptable responses and a few builders for wire records.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use jobwatch::config::MonitorConfig;
use jobwatch::error::{Result, WatchError};
use jobwatch::model::{Execution, ExecutionStatus, JobSnapshot};
use jobwatch::provider::JobProvider;
use jobwatch::settings::Settings;
use jobwatch::sync::Poller;
use jobwatch::view::MonitorState;

#[derive(Debug)]
pub struct FakeProvider {
    jobs: Mutex<std::result::Result<Vec<JobSnapshot>, String>>,
    executions: Mutex<std::result::Result<Vec<Execution>, String>>,
    settings: Mutex<Settings>,
    pub saved: Mutex<Vec<Settings>>,
    pub triggered: Mutex<Vec<String>>,
    pub cleared: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Ok(Vec::new())),
            executions: Mutex::new(Ok(Vec::new())),
            settings: Mutex::new(Settings::default()),
            saved: Mutex::new(Vec::new()),
            triggered: Mutex::new(Vec::new()),
            cleared: Mutex::new(Vec::new()),
        }
    }

    pub fn set_jobs(&self, jobs: Vec<JobSnapshot>) {
        *self.jobs.lock().unwrap() = Ok(jobs);
    }

    pub fn fail_jobs(&self, msg: &str) {
        *self.jobs.lock().unwrap() = Err(msg.to_string());
    }

    pub fn set_executions(&self, executions: Vec<Execution>) {
        *self.executions.lock().unwrap() = Ok(executions);
    }

    pub fn fail_executions(&self, msg: &str) {
        *self.executions.lock().unwrap() = Err(msg.to_string());
    }

    pub fn set_settings(&self, settings: Settings) {
        *self.settings.lock().unwrap() = settings;
    }

    pub fn saved_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl JobProvider for FakeProvider {
    async fn list_jobs(&self) -> Result<Vec<JobSnapshot>> {
        self.jobs
            .lock()
            .unwrap()
            .clone()
            .map_err(WatchError::Provider)
    }

    async fn list_executions(&self) -> Result<Vec<Execution>> {
        self.executions
            .lock()
            .unwrap()
            .clone()
            .map_err(WatchError::Provider)
    }

    async fn trigger(&self, name: &str) -> Result<()> {
        self.triggered.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn clear_error(&self, name: &str) -> Result<()> {
        self.cleared.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.saved.lock().unwrap().push(settings.clone());
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

pub fn job(name: &str) -> JobSnapshot {
    JobSnapshot {
        name: name.to_string(),
        interval: 600,
        running: true,
        last_run_unix: 0,
        next_run_unix: 0,
        err: String::new(),
        is_executing: false,
        current_status: String::new(),
    }
}

pub fn job_with_err(name: &str, err: &str) -> JobSnapshot {
    JobSnapshot {
        err: err.to_string(),
        ..job(name)
    }
}

/// Execution starting `offset_secs` after a fixed base instant, so relative
/// ordering in tests is explicit.
pub fn exec(id: &str, job_name: &str, offset_secs: i64, status: ExecutionStatus) -> Execution {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        + chrono::Duration::seconds(offset_secs);
    Execution {
        id: id.to_string(),
        job_name: job_name.to_string(),
        start_time: start,
        end_time: match status {
            ExecutionStatus::Running => None,
            _ => Some(start + chrono::Duration::seconds(5)),
        },
        status,
        logs: Vec::new(),
    }
}

pub fn state() -> MonitorState {
    MonitorState::new(MonitorConfig::default())
}

pub fn poller_setup(provider: Arc<FakeProvider>) -> (Poller, Arc<RwLock<MonitorState>>) {
    let shared = Arc::new(RwLock::new(state()));
    let poller = Poller::new(
        provider,
        shared.clone(),
        MonitorConfig::default().poll_interval(),
    );
    (poller, shared)
}
