// Upstream API response types.
// Defines structs for deserializing commit search results and code lookups,
// trimmed to the fields the application consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user or organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

/// Repository a commit belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// Author or committer identity recorded in a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Tree reference inside a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub url: String,
    pub sha: String,
}

/// The commit payload itself (message, identities, tree).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub url: String,
    pub author: CommitAuthor,
    pub committer: CommitAuthor,
    pub message: String,
    pub tree: Tree,
    #[serde(default)]
    pub comment_count: u64,
}

/// Parent commit reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parent {
    pub url: String,
    pub html_url: Option<String>,
    pub sha: String,
}

/// One commit in a search result.
///
/// `author`/`committer` are the associated accounts and may be absent when
/// the commit identity does not map to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub url: String,
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
    pub author: Option<Owner>,
    pub committer: Option<Owner>,
    #[serde(default)]
    pub parents: Vec<Parent>,
    pub repository: Option<Repository>,
    #[serde(default)]
    pub score: f64,
}

/// Commit search response: `GET /search/:query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitsSearch {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<SearchItem>,
}

/// Code lookup response: `GET /code/:owner/:repo/:sha`.
/// `code` is the diff text of the commit's first file, `language` its file
/// extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResult {
    pub code: String,
    pub language: String,
    pub commit: CommitDetail,
}
