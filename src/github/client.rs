//! Low-level GitHub REST client.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use super::error::{ApiResponse, RequestInfo, Result, StepError};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Versioned media type GitHub expects on every call.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Coordinates of the repository receiving uploads, plus the bearer
/// credential authorizing them.
#[derive(Clone)]
pub struct RepoIdentity {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

impl std::fmt::Debug for RepoIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoIdentity")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// HTTP client scoped to one repository.
///
/// Wraps `reqwest` with the API root, the repository identity, and the
/// three headers every call carries. The endpoint wrappers live in the
/// sibling modules.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    identity: RepoIdentity,
}

impl GithubClient {
    pub fn new(identity: RepoIdentity) -> Self {
        Self::with_base_url(GITHUB_API_URL, identity)
    }

    /// Point the client at a different API root (tests use a local mock
    /// server).
    pub fn with_base_url(base_url: &str, identity: RepoIdentity) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            identity,
        }
    }

    /// URL under `/repos/{owner}/{repo}`.
    pub(crate) fn repo_url(&self, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{suffix}",
            self.base_url, self.identity.owner, self.identity.repo
        )
    }

    pub(crate) async fn get(&self, url: String) -> Result<ApiResponse> {
        let request = RequestInfo {
            method: Method::GET,
            url,
        };
        // .json() would set this for us on the bodied verbs; bodyless calls
        // still carry it per the wire contract.
        let builder = self
            .http
            .get(&request.url)
            .header(CONTENT_TYPE, "application/json");
        self.dispatch(builder, request).await
    }

    pub(crate) async fn post<B: Serialize>(&self, url: String, body: &B) -> Result<ApiResponse> {
        let request = RequestInfo {
            method: Method::POST,
            url,
        };
        let builder = self.http.post(&request.url).json(body);
        self.dispatch(builder, request).await
    }

    pub(crate) async fn put<B: Serialize>(&self, url: String, body: &B) -> Result<ApiResponse> {
        let request = RequestInfo {
            method: Method::PUT,
            url,
        };
        let builder = self.http.put(&request.url).json(body);
        self.dispatch(builder, request).await
    }

    /// Attach the auth and accept headers, send, and read the whole
    /// response back.
    async fn dispatch(
        &self,
        builder: reqwest::RequestBuilder,
        request: RequestInfo,
    ) -> Result<ApiResponse> {
        let response = builder
            .header(AUTHORIZATION, format!("Bearer {}", self.identity.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|source| StepError::Transport {
                request: request.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| StepError::Transport {
                request: request.clone(),
                source,
            })?;

        Ok(ApiResponse {
            status,
            body,
            request,
        })
    }
}
