use axum::Router;
use axum_extra::routing::RouterExt;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod github;
mod routes;

pub fn create_root_app(state: AppState) -> Router {
    Router::new()
        .typed_post(routes::create_story::create_story_handler)
        .typed_get(routes::health::health_handler)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[derive(Clone)]
pub struct AppState {
    pub github: github::GitHubClient,
    /// Fallback credential; a request's own `Authorization` header wins.
    pub github_token: Option<String>,
}

impl AppState {
    pub fn from_env() -> Result<Self, String> {
        let owner = std::env::var("GITHUB_REPO_OWNER")
            .map_err(|_| String::from("GITHUB_REPO_OWNER must be set"))?;
        let repo = std::env::var("GITHUB_REPO_NAME")
            .map_err(|_| String::from("GITHUB_REPO_NAME must be set"))?;
        let api_root = std::env::var("GITHUB_API_ROOT")
            .unwrap_or_else(|_| String::from("https://api.github.com"));
        let github_token = std::env::var("GITHUB_TOKEN").ok();

        Ok(Self {
            github: github::GitHubClient::new(reqwest::Client::new(), api_root, owner, repo),
            github_token,
        })
    }
}
