//! wiremock-based GitHub mock server for testing.
//!
//! HTTP-level mocking of the endpoints the upload workflow touches, so
//! tests assert the actual requests (order, headers, bodies) rather than
//! mocking at a trait seam.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::client::{GithubClient, RepoIdentity};

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client for the fixed `owner/repo` identity pointed at this
    /// server.
    pub fn client(&self) -> GithubClient {
        GithubClient::with_base_url(
            &self.server.uri(),
            RepoIdentity {
                owner: "owner".to_string(),
                repo: "repo".to_string(),
                token: "test-token".to_string(),
            },
        )
    }

    /// Create a repository context for mounting mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }

    /// Everything the server has received, in arrival order.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Mock builders scoped to one repository.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl MockRepoContext<'_> {
    fn repo_path(&self, suffix: &str) -> String {
        format!("/repos/{}/{}{suffix}", self.owner, self.repo)
    }

    /// Mock GET /repos/{owner}/{repo} with the given default branch.
    pub async fn repo_info(&self, default_branch: &str) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": self.repo,
                "full_name": format!("{}/{}", self.owner, self.repo),
                "default_branch": default_branch,
            })))
            .mount(self.server)
            .await;
    }

    /// Repository metadata with no `default_branch` field.
    pub async fn repo_info_without_default_branch(&self) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": self.repo,
                "full_name": format!("{}/{}", self.owner, self.repo),
            })))
            .mount(self.server)
            .await;
    }

    /// Repository metadata answering an arbitrary status.
    pub async fn repo_info_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "mocked failure",
            })))
            .mount(self.server)
            .await;
    }

    /// Mock GET /git/ref/heads/{branch} resolving to `sha`.
    pub async fn branch_head(&self, branch: &str, sha: &str) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/git/ref/heads/{branch}"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ref": format!("refs/heads/{branch}"),
                "object": { "sha": sha, "type": "commit" },
            })))
            .mount(self.server)
            .await;
    }

    /// Mock POST /git/refs answering `status` (201 created, 422 already
    /// exists).
    pub async fn create_ref(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(self.repo_path("/git/refs")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "ref": "refs/heads/figma-tokens-update-0",
            })))
            .mount(self.server)
            .await;
    }

    /// Probe answering 200 with the file's content SHA.
    pub async fn contents_found(&self, file_path: &str, sha: &str) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/contents/{file_path}"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "path": file_path,
                "sha": sha,
            })))
            .mount(self.server)
            .await;
    }

    /// Probe answering 404: the file does not exist yet.
    pub async fn contents_missing(&self, file_path: &str) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/contents/{file_path}"))))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
            })))
            .mount(self.server)
            .await;
    }

    /// Probe answering an arbitrary status.
    pub async fn contents_status(&self, file_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/contents/{file_path}"))))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "mocked failure",
            })))
            .mount(self.server)
            .await;
    }

    /// Mock PUT /contents/{path} answering `status`.
    pub async fn put_contents(&self, file_path: &str, status: u16) {
        Mock::given(method("PUT"))
            .and(path(self.repo_path(&format!("/contents/{file_path}"))))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "content": { "path": file_path },
            })))
            .mount(self.server)
            .await;
    }

    /// Mock POST /pulls answering `status`.
    pub async fn create_pull(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(self.repo_path("/pulls")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "number": 1,
                "html_url": format!("https://github.com/{}/{}/pull/1", self.owner, self.repo),
            })))
            .mount(self.server)
            .await;
    }
}
