use axum::http::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Serialize;
use tracing::error;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const CLIENT_USER_AGENT: &str = concat!("story-proxy/", env!("CARGO_PKG_VERSION"));

/// The one payload we send to GitHub: a normalized story.
#[derive(Debug, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

#[derive(Debug)]
pub enum CreateIssueError {
    Request(reqwest::Error),
    Decode(reqwest::Error),
}

impl CreateIssueError {
    pub fn message(&self) -> String {
        match self {
            CreateIssueError::Request(e) | CreateIssueError::Decode(e) => e.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_root: String,
    pub owner: String,
    pub repo: String,
}

impl GitHubClient {
    pub fn new(http: reqwest::Client, api_root: String, owner: String, repo: String) -> Self {
        Self {
            http,
            api_root,
            owner,
            repo,
        }
    }

    /// Fires the single outbound POST and decodes whatever comes back as
    /// JSON, success or not. One attempt, no retry.
    pub async fn create_issue(
        &self,
        token: &str,
        issue: &NewIssue,
    ) -> Result<(StatusCode, serde_json::Value), CreateIssueError> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.api_root, self.owner, self.repo
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .json(issue)
            .send()
            .await
            .map_err(|e| {
                error!("github request failed: {:?}", e);
                CreateIssueError::Request(e)
            })?;

        let status: StatusCode = response.status();
        let data = response.json::<serde_json::Value>().await.map_err(|e| {
            error!("github response was not json: {:?}", e);
            CreateIssueError::Decode(e)
        })?;

        Ok((status, data))
    }
}
