use crate::AppState;
use crate::error::ApiError;
use crate::github::NewIssue;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct CreateStoryBody {
    title: Option<String>,
    body: Option<String>,
    labels: Option<Labels>,
}

/// Callers send labels either as a proper array or as one
/// comma-separated string; GitHub only accepts the array form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Labels {
    List(Vec<String>),
    CommaSeparated(String),
}

impl Labels {
    fn normalize(self) -> Vec<String> {
        match self {
            Labels::List(labels) => labels,
            Labels::CommaSeparated(s) if s.is_empty() => Vec::new(),
            Labels::CommaSeparated(s) => s.split(',').map(|l| l.trim().to_string()).collect(),
        }
    }
}

pub async fn create_story_handler(
    _: super::CreateStoryPath,
    State(state): State<AppState>,
    headers: HeaderMap,
    raw_body: axum::body::Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let token =
        resolve_token(state.github_token.as_deref(), &headers).ok_or(ApiError::MissingToken)?;

    // Parsed by hand rather than through the Json extractor so a broken
    // body surfaces as our own structured 500, not an extractor rejection.
    let req: CreateStoryBody =
        serde_json::from_slice(&raw_body).map_err(|e| ApiError::Server(e.to_string()))?;

    let title = req
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Validation("Title is required"))?;

    let issue = NewIssue {
        title: title.to_string(),
        body: req.body.unwrap_or_default(),
        labels: req.labels.map(Labels::normalize).unwrap_or_default(),
    };

    info!(
        "creating story \"{}\" in repo {}/{}",
        issue.title, state.github.owner, state.github.repo
    );

    let (status, data) = state
        .github
        .create_issue(&token, &issue)
        .await
        .map_err(|e| ApiError::Server(e.message()))?;

    if !status.is_success() {
        error!("github api error: {}", data);
        let message = data
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
            });
        return Err(ApiError::Upstream { status, message });
    }

    info!("story created in repo {}/{}", state.github.owner, state.github.repo);

    Ok((StatusCode::CREATED, Json(data)))
}

/// Prefers a `Bearer` token from the request over the configured one; a
/// bearer header with a blank token deliberately clears the fallback.
fn resolve_token(configured: Option<&str>, headers: &HeaderMap) -> Option<String> {
    let mut token = configured.unwrap_or_default().to_string();
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
        && let Some(bearer) = value.strip_prefix("Bearer ")
    {
        token = bearer.trim().to_string();
    }

    (!token.is_empty()).then_some(token)
}
