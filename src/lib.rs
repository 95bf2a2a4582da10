//! Publishes generated design token files into a GitHub repository.
//!
//! One [`publish`](GithubPublisher::publish) call drives a fixed sequence
//! of REST calls: resolve the repository's default branch, fork a
//! timestamp-named working branch from its head, detect whether the target
//! file already exists, commit the encoded payload to the working branch,
//! and open a pull request back into the default branch. Completion is
//! reported through a caller-supplied [`ResponseHandler`]; diagnostics
//! flow through an injectable [`PublishObserver`].
//!
//! ```no_run
//! # async fn demo() {
//! use figma_tokens_publisher::{
//!     ApiResponse, GithubPublisher, RepoIdentity, ResponseHandler, UploadRequest,
//!     UploadSettings,
//! };
//!
//! struct PrintHandler;
//!
//! impl ResponseHandler for PrintHandler {
//!     fn on_transport_error(&self) {
//!         eprintln!("upload failed without a response");
//!     }
//!
//!     fn on_response(&self, response: ApiResponse) {
//!         eprintln!("service answered {}", response.status);
//!     }
//! }
//!
//! let publisher = GithubPublisher::new(RepoIdentity {
//!     owner: "acme".to_string(),
//!     repo: "design-tokens".to_string(),
//!     token: "ghp_secret".to_string(),
//! });
//! let request = UploadRequest {
//!     tokens: r##"{"color":{"primary":"#0af"}}"##.to_string(),
//!     filename: "tokens.json".to_string(),
//!     commit_message: Some("Update design tokens".to_string()),
//! };
//! let settings = UploadSettings {
//!     reference: "main".to_string(),
//! };
//! publisher.publish(&request, &settings, &PrintHandler).await;
//! # }
//! ```

pub mod encoding;
pub mod github;
pub mod publisher;

pub use github::{ApiResponse, GithubClient, PutFileParams, RepoIdentity, RequestInfo, StepError};
pub use publisher::{
    GithubPublisher, PublishObserver, ResponseHandler, TracingObserver, UploadRequest,
    UploadSettings, WorkflowStep,
};
