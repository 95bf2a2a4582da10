//! Observability hooks for the upload workflow.

use std::fmt;

use crate::github::StepError;

/// The network steps of one publish invocation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    ResolveDefaultBranch,
    ResolveHeadSha,
    CreateBranch,
    ProbeFile,
    UploadFile,
    OpenPullRequest,
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowStep::ResolveDefaultBranch => "resolve default branch",
            WorkflowStep::ResolveHeadSha => "resolve head sha",
            WorkflowStep::CreateBranch => "create branch",
            WorkflowStep::ProbeFile => "probe file",
            WorkflowStep::UploadFile => "upload file",
            WorkflowStep::OpenPullRequest => "open pull request",
        };
        f.write_str(name)
    }
}

/// Receives diagnostic lifecycle events as the workflow advances.
///
/// Implementations must not affect control flow; the orchestrator ignores
/// anything they do.
pub trait PublishObserver: Send + Sync {
    /// A publish invocation began for `filename`, logically targeting
    /// `reference` (the actual base branch is re-derived remotely).
    fn publish_started(&self, filename: &str, reference: &str);

    fn step_started(&self, step: WorkflowStep);

    /// `detail` is step-specific: the resolved branch, the SHA, the probe
    /// outcome, or the response status.
    fn step_completed(&self, step: WorkflowStep, detail: &str);

    fn step_failed(&self, step: WorkflowStep, error: &StepError);
}

/// Default observer forwarding everything to the `tracing` facade.
pub struct TracingObserver;

impl PublishObserver for TracingObserver {
    fn publish_started(&self, filename: &str, reference: &str) {
        tracing::debug!(filename, reference, "starting token upload");
    }

    fn step_started(&self, step: WorkflowStep) {
        tracing::debug!(%step, "step started");
    }

    fn step_completed(&self, step: WorkflowStep, detail: &str) {
        tracing::debug!(%step, detail, "step completed");
    }

    fn step_failed(&self, step: WorkflowStep, error: &StepError) {
        tracing::warn!(%step, %error, "step failed");
    }
}
