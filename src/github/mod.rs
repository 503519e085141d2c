//! GitHub REST access for reading and writing the checklist

mod client;

use serde::{Deserialize, Serialize};

pub use client::GitHubClient;

/// Author of an issue comment
#[derive(Debug, Clone, Deserialize)]
pub struct CommentUser {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    pub user: CommentUser,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PullRequest {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BodyUpdate<'a> {
    pub body: &'a str,
}

/// First bot-authored comment carrying the checklist header.
pub fn find_bot_comment<'a>(comments: &'a [IssueComment], header: &str) -> Option<&'a IssueComment> {
    comments
        .iter()
        .find(|c| c.user.kind == "Bot" && c.body.contains(header))
}
