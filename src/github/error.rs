//! Step result types for the GitHub API.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Method and URL of a dispatched request, attached to failures so the
/// caller can tell which call produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: Method,
    pub url: String,
}

impl std::fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// A response read back from the API: status plus raw body, with the
/// request that triggered it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
    pub request: RequestInfo,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body, keeping the full response in the error when
    /// the body does not match the expected shape.
    pub(crate) fn decode<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        match serde_json::from_str(&self.body) {
            Ok(value) => Ok(value),
            Err(source) => Err(StepError::Decode {
                response: self,
                source,
            }),
        }
    }
}

/// Failure of a single workflow step.
///
/// Every network operation resolves to a payload, a raw [`ApiResponse`]
/// the caller inspects, or one of these variants. Absence of a probed file
/// is not an error; the probe returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum StepError {
    /// The request produced no response at all.
    #[error("request {request} failed: {source}")]
    Transport {
        request: RequestInfo,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status outside the step's success set.
    #[error("unexpected status {} from {}", .response.status, .response.request)]
    Status { response: ApiResponse },

    /// The service answered successfully but the body was not the expected
    /// shape.
    #[error("undecodable response from {}: {source}", .response.request)]
    Decode {
        response: ApiResponse,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StepError>;
