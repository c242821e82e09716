use axum_extra::routing::TypedPath;
use serde::Deserialize;

pub mod create_story;
pub mod health;

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/stories")]
pub struct CreateStoryPath;

#[derive(TypedPath, Deserialize)]
#[typed_path("/health")]
pub struct HealthPath;
