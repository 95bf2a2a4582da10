//! Pull request creation.

use indoc::formatdoc;
use serde::Serialize;

use super::client::GithubClient;
use super::error::{ApiResponse, Result};

/// Title used when the caller supplied no commit message.
const FALLBACK_TITLE: &str = "Update design tokens from Figma";

#[derive(Serialize)]
struct CreatePrBody<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: String,
}

/// Title for the review request: the commit message when one was given.
fn pr_title(commit_message: Option<&str>) -> &str {
    commit_message.unwrap_or(FALLBACK_TITLE)
}

/// Fixed Markdown body stating the change was generated automatically.
fn pr_body(commit_message: &str) -> String {
    formatdoc! {"
        ## Design Token Update

        This PR was automatically created by the Figma Design Tokens plugin.

        ### Changes
        - Updated design tokens from Figma
        - Commit: {commit_message}

        **Note:** Please review the changes and run the transformation workflow before merging."
    }
}

impl GithubClient {
    /// Open a pull request merging `head` into `base`.
    ///
    /// Returns the raw response; interpreting it (including "no diff"
    /// rejections) is the caller's business.
    pub async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        commit_message: Option<&str>,
    ) -> Result<ApiResponse> {
        let title = pr_title(commit_message);
        let body = CreatePrBody {
            title,
            head,
            base,
            body: pr_body(title),
        };
        self.post(self.repo_url("/pulls"), &body).await
    }
}
