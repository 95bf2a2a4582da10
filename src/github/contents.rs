//! Repository contents operations: existence probe and file upload.

use serde::{Deserialize, Serialize};

use super::client::GithubClient;
use super::error::{ApiResponse, Result, StepError};

#[derive(Debug, Deserialize)]
struct ContentsInfo {
    sha: String,
}

/// Parameters for the create-or-update commit on the working branch.
#[derive(Debug, Clone)]
pub struct PutFileParams {
    pub path: String,
    /// Base64-encoded file content.
    pub content: String,
    pub message: String,
    pub branch: String,
    /// Content SHA captured by the probe; present iff the file already
    /// exists, which turns the PUT into an update.
    pub existing_sha: Option<String>,
}

#[derive(Serialize)]
struct PutFileBody<'a> {
    message: &'a str,
    content: &'a str,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

impl GithubClient {
    /// Content SHA of `path` on `branch`, or `None` when the file does not
    /// exist yet. The SHA is what authorizes an overwrite on upload.
    pub async fn file_sha(&self, path: &str, branch: &str) -> Result<Option<String>> {
        let response = self
            .get(self.repo_url(&format!("/contents/{path}?ref={branch}")))
            .await?;
        match response.status.as_u16() {
            200 => {
                let info: ContentsInfo = response.decode()?;
                Ok(Some(info.sha))
            }
            404 => Ok(None),
            _ => Err(StepError::Status { response }),
        }
    }

    /// Commit `content` to `path` on `branch`.
    ///
    /// Returns whatever the service answered; deciding what the status
    /// means is the caller's business.
    pub async fn put_file(&self, params: &PutFileParams) -> Result<ApiResponse> {
        let body = PutFileBody {
            message: &params.message,
            content: &params.content,
            branch: &params.branch,
            sha: params.existing_sha.as_deref(),
        };
        self.put(self.repo_url(&format!("/contents/{}", params.path)), &body)
            .await
    }
}
