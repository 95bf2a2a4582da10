//! Upload workflow orchestration.
//!
//! Drives the fixed sequence of GitHub calls that publishes one token
//! file: resolve the default branch, fork a timestamp-named working branch
//! from its head, probe the target path, commit the encoded payload, and
//! open a pull request back into the default branch.

mod handler;
mod observer;
mod state;

pub use handler::ResponseHandler;
pub use observer::{PublishObserver, TracingObserver, WorkflowStep};
pub use state::{ProbedTarget, ResolvedBase, WorkingBranch};

use std::sync::Arc;

use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::encoding;
use crate::github::{GithubClient, PutFileParams, RepoIdentity, StepError};

/// One file to publish: the raw token text, where it goes, and the commit
/// message to record.
///
/// Deserializes from the UI layer's camelCase JSON payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub tokens: String,
    pub filename: String,
    #[serde(default)]
    pub commit_message: Option<String>,
}

/// Caller-selected upload settings.
///
/// `reference` names the branch the caller believes is the target; the
/// publisher re-derives the actual default branch remotely and uses
/// `reference` for diagnostics only.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub reference: String,
}

/// Orchestrates the multi-step upload protocol against one repository.
pub struct GithubPublisher {
    client: GithubClient,
    observer: Arc<dyn PublishObserver>,
}

impl GithubPublisher {
    pub fn new(identity: RepoIdentity) -> Self {
        Self::with_client(GithubClient::new(identity))
    }

    /// Build from an existing client (tests point one at a mock server).
    pub fn with_client(client: GithubClient) -> Self {
        Self {
            client,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the default tracing observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PublishObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Publish one token file and report the outcome through `handler`.
    ///
    /// Completion is observed only through the handler; exactly one of its
    /// reactions fires. Mutating steps are not rolled back on a later
    /// failure: a working branch created before a failed upload is left
    /// behind.
    pub async fn publish(
        &self,
        request: &UploadRequest,
        settings: &UploadSettings,
        handler: &dyn ResponseHandler,
    ) {
        self.observer
            .publish_started(&request.filename, &settings.reference);

        let target = match self.prepare(request).await {
            Ok(target) => target,
            Err(error) => {
                // A 401 before the upload is the one early failure callers
                // may distinguish; everything else is downgraded to the
                // generic reaction.
                match error {
                    StepError::Status { response }
                        if response.status == StatusCode::UNAUTHORIZED =>
                    {
                        handler.on_response(response);
                    }
                    _ => handler.on_transport_error(),
                }
                return;
            }
        };

        self.upload_and_finish(request, &target, handler).await;
    }

    /// Steps 1–5: resolve the base, fork the working branch, probe the
    /// target path. Fails fast on the first unsuccessful step.
    async fn prepare(&self, request: &UploadRequest) -> Result<ProbedTarget, StepError> {
        let observer = self.observer.as_ref();

        observer.step_started(WorkflowStep::ResolveDefaultBranch);
        let default_branch = self
            .client
            .default_branch()
            .await
            .inspect_err(|e| observer.step_failed(WorkflowStep::ResolveDefaultBranch, e))?;
        observer.step_completed(WorkflowStep::ResolveDefaultBranch, &default_branch);

        observer.step_started(WorkflowStep::ResolveHeadSha);
        let head_sha = self
            .client
            .branch_head_sha(&default_branch)
            .await
            .inspect_err(|e| observer.step_failed(WorkflowStep::ResolveHeadSha, e))?;
        observer.step_completed(WorkflowStep::ResolveHeadSha, &head_sha);

        let base = ResolvedBase {
            default_branch,
            head_sha,
        };
        let branch = WorkingBranch::derive(base, Utc::now().timestamp_millis());

        observer.step_started(WorkflowStep::CreateBranch);
        self.client
            .create_branch(&branch.name, &branch.base.head_sha)
            .await
            .inspect_err(|e| observer.step_failed(WorkflowStep::CreateBranch, e))?;
        observer.step_completed(WorkflowStep::CreateBranch, &branch.name);

        observer.step_started(WorkflowStep::ProbeFile);
        let existing_sha = self
            .client
            .file_sha(&request.filename, &branch.name)
            .await
            .inspect_err(|e| observer.step_failed(WorkflowStep::ProbeFile, e))?;
        observer.step_completed(
            WorkflowStep::ProbeFile,
            existing_sha.as_deref().unwrap_or("absent"),
        );

        Ok(ProbedTarget {
            branch,
            existing_sha,
        })
    }

    /// Step 6 and the terminal decision: commit the encoded content, then
    /// either open the pull request or hand the response to the caller.
    async fn upload_and_finish(
        &self,
        request: &UploadRequest,
        target: &ProbedTarget,
        handler: &dyn ResponseHandler,
    ) {
        let observer = self.observer.as_ref();

        let message = request.commit_message.clone().unwrap_or_else(|| {
            format!("Update design tokens at {}", Utc::now().timestamp_millis())
        });
        let params = PutFileParams {
            path: request.filename.clone(),
            content: encoding::utf8_to_base64(&request.tokens),
            message,
            branch: target.branch.name.clone(),
            existing_sha: target.existing_sha.clone(),
        };

        observer.step_started(WorkflowStep::UploadFile);
        let response = match self.client.put_file(&params).await {
            Ok(response) => response,
            Err(error) => {
                observer.step_failed(WorkflowStep::UploadFile, &error);
                handler.on_transport_error();
                return;
            }
        };
        observer.step_completed(
            WorkflowStep::UploadFile,
            &format!("status {}", response.status),
        );

        if !response.is_success() {
            handler.on_response(response);
            return;
        }

        observer.step_started(WorkflowStep::OpenPullRequest);
        match self
            .client
            .create_pull_request(
                &target.branch.name,
                &target.branch.base.default_branch,
                request.commit_message.as_deref(),
            )
            .await
        {
            Ok(response) => {
                observer.step_completed(
                    WorkflowStep::OpenPullRequest,
                    &format!("status {}", response.status),
                );
                handler.on_response(response);
            }
            Err(error) => {
                observer.step_failed(WorkflowStep::OpenPullRequest, &error);
                handler.on_transport_error();
            }
        }
    }
}
