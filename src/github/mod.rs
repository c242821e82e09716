mod client;

pub use client::{CreateIssueError, GitHubClient, NewIssue};
