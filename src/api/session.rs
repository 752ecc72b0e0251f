// Search session over the fetch cache.
// Drives one cache for commit searches and one for code lookups, recording
// results by query text and by commit sha the way the UI consumes them.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::QuarryError;
use crate::fetch::{FetchCache, FetchConfig};
use crate::transport::Transport;

use super::endpoints::{code_path, search_path};
use super::params::SearchParams;
use super::types::{CodeResult, CommitsSearch};

/// Stateful consumer of the commit-search API.
///
/// Holds two independent fetch caches (search results and code lookups) over
/// a shared transport, plus records of everything observed so far: search
/// results keyed by query text and diff payloads keyed by commit sha.
#[derive(Debug)]
pub struct SearchSession<C> {
    commits: FetchCache<CommitsSearch, C>,
    code: FetchCache<CodeResult, C>,
    commits_by_query: HashMap<String, CommitsSearch>,
    code_by_sha: HashMap<String, CodeResult>,
}

impl<C> SearchSession<C>
where
    C: Transport + Clone,
{
    pub fn new(transport: C, cache_duration: Duration) -> Self {
        Self {
            commits: FetchCache::new(
                transport.clone(),
                FetchConfig::new("/", cache_duration),
            ),
            code: FetchCache::new(transport, FetchConfig::new("/", cache_duration)),
            commits_by_query: HashMap::new(),
            code_by_sha: HashMap::new(),
        }
    }

    /// Search commits for a query text plus filters. The result (fetched or
    /// served from cache) is recorded under the query text.
    pub async fn search(&mut self, query: &str, params: &SearchParams) {
        let path = search_path(query, params);
        self.commits.issue(Some(&path), None).await;
        if let Some(results) = self.commits.cached_value(Some(&path), None) {
            self.commits_by_query
                .insert(query.to_owned(), results.clone());
        }
    }

    /// Fetch the diff payload for a commit. A sha already on record is never
    /// refetched.
    pub async fn load_code(&mut self, owner: &str, repo: &str, sha: &str) {
        if self.code_by_sha.contains_key(sha) {
            return;
        }
        let path = code_path(owner, repo, sha);
        self.code.issue(Some(&path), None).await;
        if let Some(result) = self.code.cached_value(Some(&path), None) {
            self.code_by_sha.insert(sha.to_owned(), result.clone());
        }
    }

    pub fn results_for(&self, query: &str) -> Option<&CommitsSearch> {
        self.commits_by_query.get(query)
    }

    pub fn code_for(&self, sha: &str) -> Option<&CodeResult> {
        self.code_by_sha.get(sha)
    }

    pub fn loading_commits(&self) -> Option<bool> {
        self.commits.loading()
    }

    pub fn loading_code(&self) -> Option<bool> {
        self.code.loading()
    }

    pub fn search_error(&self) -> Option<&QuarryError> {
        self.commits.error()
    }

    pub fn code_error(&self) -> Option<&QuarryError> {
        self.code.error()
    }

    /// Drop both caches' entries; recorded results stay available.
    pub fn clear_caches(&mut self) {
        self.commits.clear_cache();
        self.code.clear_cache();
    }
}
