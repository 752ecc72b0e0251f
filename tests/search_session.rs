// Integration tests for the search session: result recording by query,
// the sha refetch guard, and fault surfacing.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use quarry::api::{SearchParams, SearchSession};
use quarry::error::Result;
use quarry::{QuarryError, RequestOptions, Transport};

const SEARCH_BODY: &str = r#"{
    "total_count": 1,
    "incomplete_results": false,
    "items": [{
        "url": "https://api.github.com/repos/a/b/commits/deadbeef",
        "sha": "deadbeef",
        "html_url": "https://github.com/a/b/commit/deadbeef",
        "commit": {
            "url": "https://api.github.com/repos/a/b/git/commits/deadbeef",
            "author": {"name": "Ada", "email": "ada@example.com", "date": "2023-04-01T12:00:00Z"},
            "committer": {"name": "Ada", "email": "ada@example.com", "date": "2023-04-01T12:00:00Z"},
            "message": "fix: off-by-one in pager",
            "tree": {"url": "u", "sha": "t"},
            "comment_count": 0
        },
        "author": null,
        "committer": null,
        "parents": [],
        "repository": null,
        "score": 1.0
    }]
}"#;

const CODE_BODY: &str = r#"{
    "code": "@@ -1 +1 @@\n-old\n+new",
    "language": "rs",
    "commit": {
        "url": "https://api.github.com/repos/a/b/git/commits/deadbeef",
        "author": {"name": "Ada", "email": "ada@example.com", "date": "2023-04-01T12:00:00Z"},
        "committer": {"name": "Ada", "email": "ada@example.com", "date": "2023-04-01T12:00:00Z"},
        "message": "fix",
        "tree": {"url": "u", "sha": "t"},
        "comment_count": 0
    }
}"#;

/// Transport double serving fixed bodies per address.
#[derive(Clone)]
struct StubTransport {
    calls: Arc<AtomicUsize>,
    bodies: Arc<HashMap<String, String>>,
}

impl StubTransport {
    fn new(bodies: &[(&str, &str)]) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            bodies: Arc::new(
                bodies
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            ),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for StubTransport {
    async fn send(&self, url: &str, _options: &RequestOptions) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| QuarryError::Other(format!("no stub for {url}")))
    }
}

#[tokio::test(start_paused = true)]
async fn search_records_results_by_query() {
    let transport = StubTransport::new(&[("/search/fix", SEARCH_BODY)]);
    let mut session = SearchSession::new(transport.clone(), Duration::from_secs(60));

    session.search("fix", &SearchParams::default()).await;

    let results = session.results_for("fix").unwrap();
    assert_eq!(results.total_count, 1);
    assert_eq!(results.items[0].sha, "deadbeef");
    assert_eq!(session.loading_commits(), Some(false));
    assert!(session.search_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn repeated_search_is_served_from_cache() {
    let transport = StubTransport::new(&[
        ("/search/fix", SEARCH_BODY),
        ("/search/fix?language=rust", SEARCH_BODY),
    ]);
    let mut session = SearchSession::new(transport.clone(), Duration::from_secs(60));

    session.search("fix", &SearchParams::default()).await;

    let filtered = SearchParams {
        language: Some("rust".into()),
        ..Default::default()
    };
    session.search("fix", &filtered).await;
    assert_eq!(transport.calls(), 2);

    // Same query and filters again: no network, record still present.
    session.search("fix", &SearchParams::default()).await;
    assert_eq!(transport.calls(), 2);
    assert!(session.results_for("fix").is_some());
}

#[tokio::test(start_paused = true)]
async fn load_code_skips_known_shas() {
    let transport = StubTransport::new(&[("/code/a/b/deadbeef", CODE_BODY)]);
    let mut session = SearchSession::new(transport.clone(), Duration::from_secs(60));

    session.load_code("a", "b", "deadbeef").await;
    assert_eq!(transport.calls(), 1);
    assert_eq!(session.code_for("deadbeef").unwrap().language, "rs");

    // A recorded sha is never refetched, even after the caches are cleared.
    session.clear_caches();
    session.load_code("a", "b", "deadbeef").await;
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn search_failure_surfaces_through_error() {
    let transport = StubTransport::new(&[]);
    let mut session = SearchSession::new(transport, Duration::from_secs(60));

    session.search("fix", &SearchParams::default()).await;
    assert!(session.search_error().is_some());
    assert!(session.results_for("fix").is_none());
    assert_eq!(session.loading_commits(), Some(false));
}
