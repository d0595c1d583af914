use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{Result, WatchError};
use crate::model::{Execution, JobSnapshot};
use crate::provider::JobProvider;
use crate::settings::Settings;

/// JSON-over-HTTP provider client.
///
/// Talks to the scheduler's `/api` surface: `GET /api/jobs`,
/// `GET /api/executions`, `POST /api/jobs/{name}/trigger`,
/// `POST /api/jobs/{name}/clear-error`, `GET`/`PUT /api/settings`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl JobProvider for HttpProvider {
    async fn list_jobs(&self) -> Result<Vec<JobSnapshot>> {
        let jobs = self
            .client
            .get(self.url("/api/jobs"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(jobs)
    }

    async fn list_executions(&self) -> Result<Vec<Execution>> {
        let executions = self
            .client
            .get(self.url("/api/executions"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(executions)
    }

    async fn trigger(&self, name: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/api/jobs/{}/trigger", name)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WatchError::UnknownJob(name.to_string()));
        }
        response.error_for_status()?;
        Ok(())
    }

    async fn clear_error(&self, name: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/api/jobs/{}/clear-error", name)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WatchError::UnknownJob(name.to_string()));
        }
        response.error_for_status()?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<Settings> {
        let settings = self
            .client
            .get(self.url("/api/settings"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(settings)
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.client
            .put(self.url("/api/settings"))
            .json(settings)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
