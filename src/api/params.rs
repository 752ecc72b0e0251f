// Search filters and query encoding.
// Renders filters both as percent-encoded query pairs for the proxy and as
// the upstream search qualifier syntax the proxy forwards.

use serde::{Deserialize, Serialize};

/// Optional filters accepted by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub language: Option<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub is: Option<String>,
    pub hash: Option<String>,
}

impl SearchParams {
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Present filters as (name, value) pairs, in the order the proxy
    /// recognizes them.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        let fields = [
            ("language", &self.language),
            ("author", &self.author),
            ("committer", &self.committer),
            ("repo", &self.repo),
            ("path", &self.path),
            ("is", &self.is),
            ("hash", &self.hash),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                pairs.push((name, value.as_str()));
            }
        }
        pairs
    }
}

/// Append percent-encoded query pairs to an address.
/// The first pair gets `?`, the rest `&`.
pub fn append_query(url: &str, pairs: &[(&str, &str)]) -> String {
    let mut url = url.to_string();
    for (i, (name, value)) in pairs.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        url.push(sep);
        url.push_str(&urlencoding::encode(name));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// Render the upstream commit-search query string for a search text plus
/// filters: `q=<text>` followed by `+<qualifier>:<value>` terms. Author and
/// committer values are quoted, matching what the proxy sends upstream.
pub fn upstream_query(text: &str, params: &SearchParams) -> String {
    let mut query = format!("q={text}");
    if let Some(language) = &params.language {
        query.push_str(&format!("+language:{language}"));
    }
    if let Some(author) = &params.author {
        query.push_str(&format!("+author:\"{author}\""));
    }
    if let Some(committer) = &params.committer {
        query.push_str(&format!("+committer:\"{committer}\""));
    }
    if let Some(repo) = &params.repo {
        query.push_str(&format!("+repo:{repo}"));
    }
    if let Some(path) = &params.path {
        query.push_str(&format!("+path:{path}"));
    }
    if let Some(is) = &params.is {
        query.push_str(&format!("+is:{is}"));
    }
    if let Some(hash) = &params.hash {
        query.push_str(&format!("+hash:{hash}"));
    }
    query
}
