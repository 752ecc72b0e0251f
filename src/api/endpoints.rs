// Endpoint path builders for the search proxy.

use super::params::{SearchParams, append_query};

/// Path for a commit search: `/search/:query` plus filter pairs.
pub fn search_path(query: &str, params: &SearchParams) -> String {
    let path = format!("/search/{}", urlencoding::encode(query));
    append_query(&path, &params.pairs())
}

/// Path for a code lookup: `/code/:owner/:repo/:sha`.
pub fn code_path(owner: &str, repo: &str, sha: &str) -> String {
    format!("/code/{owner}/{repo}/{sha}")
}
