//! Repository metadata lookups.

use reqwest::StatusCode;
use serde::Deserialize;

use super::client::GithubClient;
use super::error::{Result, StepError};

#[derive(Debug, Deserialize)]
struct RepoInfo {
    default_branch: Option<String>,
}

impl GithubClient {
    /// Resolve the repository's default branch.
    ///
    /// Falls back to `main` when the service omits the field.
    pub async fn default_branch(&self) -> Result<String> {
        let response = self.get(self.repo_url("")).await?;
        if response.status != StatusCode::OK {
            return Err(StepError::Status { response });
        }
        let info: RepoInfo = response.decode()?;
        Ok(info.default_branch.unwrap_or_else(|| "main".to_string()))
    }
}
