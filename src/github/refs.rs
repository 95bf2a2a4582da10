//! Git reference operations: head lookup and branch creation.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::client::GithubClient;
use super::error::{Result, StepError};

#[derive(Debug, Deserialize)]
struct GitRef {
    object: RefObject,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    sha: String,
}

impl GithubClient {
    /// SHA of the commit `branch` currently points at.
    pub async fn branch_head_sha(&self, branch: &str) -> Result<String> {
        let response = self
            .get(self.repo_url(&format!("/git/ref/heads/{branch}")))
            .await?;
        if response.status != StatusCode::OK {
            return Err(StepError::Status { response });
        }
        let git_ref: GitRef = response.decode()?;
        Ok(git_ref.object.sha)
    }

    /// Create `branch` pointing at `sha`.
    ///
    /// 422 means the ref already exists; a prior partial run may have
    /// created it, so it counts as success alongside 201.
    pub async fn create_branch(&self, branch: &str, sha: &str) -> Result<()> {
        let body = json!({
            "ref": format!("refs/heads/{branch}"),
            "sha": sha,
        });
        let response = self.post(self.repo_url("/git/refs"), &body).await?;
        match response.status.as_u16() {
            201 | 422 => Ok(()),
            _ => Err(StepError::Status { response }),
        }
    }
}
