//! GitHub REST API integration.
//!
//! Thin wrappers over the handful of endpoints the upload workflow needs,
//! one module per API area. Every wrapper resolves to a payload, a raw
//! [`ApiResponse`] for the caller to interpret, or a [`StepError`].

mod client;
mod contents;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod pr;
mod refs;
mod repo;

pub use client::{GithubClient, RepoIdentity};
pub use contents::PutFileParams;
pub use error::{ApiResponse, RequestInfo, StepError};
