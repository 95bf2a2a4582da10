//! Caller-supplied reactions to the outcome of a publish.

use crate::github::ApiResponse;

/// How the caller observes completion.
///
/// [`publish`](crate::GithubPublisher::publish) never returns a value;
/// exactly one of these reactions fires per invocation. `on_response`
/// receives every response the caller must interpret itself: the upload
/// result, the pull-request result, and an early 401. `on_transport_error`
/// covers everything that produced no response worth inspecting.
pub trait ResponseHandler: Send + Sync {
    /// The workflow failed without a response the caller should inspect.
    fn on_transport_error(&self);

    /// A response was received; the caller decides what its status means.
    fn on_response(&self, response: ApiResponse);
}
