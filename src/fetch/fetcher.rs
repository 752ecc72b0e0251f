// The fetch cache core.
// One request function, one in-memory cache list, one observable request
// state; every API call in the application goes through an instance of this.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::QuarryError;
use crate::transport::{RequestOptions, Transport};

use super::cache::{CacheEntry, CacheList};
use super::state::RequestState;

/// Default freshness window when the caller does not choose one: 5 minutes.
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(5 * 60);

/// Configuration for a [`FetchCache`].
///
/// Taken by value at construction, so the instance holds a snapshot: mutating
/// the caller's copy afterwards cannot affect requests already configured.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Address used when `issue` supplies none.
    pub default_url: String,
    /// Request options used when `issue` supplies none.
    pub default_options: RequestOptions,
    /// How long a cached entry stays fresh.
    pub cache_duration: Duration,
    /// Also record lifecycle state per identity, readable via `state_for`.
    /// The shared slot is updated either way.
    pub keyed_state: bool,
    /// Bound on cache growth; `None` keeps the list unbounded.
    pub max_entries: Option<usize>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            default_url: "/".to_string(),
            default_options: RequestOptions::default(),
            cache_duration: DEFAULT_CACHE_DURATION,
            keyed_state: false,
            max_entries: None,
        }
    }
}

impl FetchConfig {
    /// Config with a default address and freshness window.
    pub fn new(default_url: impl Into<String>, cache_duration: Duration) -> Self {
        Self {
            default_url: default_url.into(),
            cache_duration,
            ..Self::default()
        }
    }
}

/// Generic request/response cache with time-based invalidation and
/// deduplication by canonical request identity.
///
/// `issue` either serves silence (a fresh entry exists, nothing changes) or
/// performs the network call and settles the observable [`RequestState`].
/// Faults never escape `issue`; callers observe `error`/`has_error` instead
/// of catching anything.
///
/// `issue` takes `&mut self`, so calls on one instance are serialized; when
/// alternating between identities the shared state slot always reflects the
/// most recent settlement. Enable `keyed_state` to additionally keep one
/// state per identity. Dropping an in-flight `issue` future cancels the
/// request: the state is left showing in-flight, no cache entry is written,
/// and the instance remains usable.
#[derive(Debug)]
pub struct FetchCache<T, C> {
    transport: C,
    default_url: String,
    default_options: RequestOptions,
    cache_duration: Duration,
    keyed_state: bool,
    cache: CacheList<T>,
    state: RequestState<T>,
    keyed: HashMap<String, RequestState<T>>,
}

impl<T, C> FetchCache<T, C>
where
    T: DeserializeOwned + Clone,
    C: Transport,
{
    pub fn new(transport: C, config: FetchConfig) -> Self {
        Self {
            transport,
            default_url: config.default_url,
            default_options: config.default_options,
            cache_duration: config.cache_duration,
            keyed_state: config.keyed_state,
            cache: CacheList::new(config.max_entries),
            state: RequestState::new(),
            keyed: HashMap::new(),
        }
    }

    /// Issue a request against the effective address and options.
    ///
    /// If the first cache entry matching the request identity is still within
    /// the freshness window, this is a no-op: no network call, and the state
    /// is not refreshed either. Callers wanting the value read previously
    /// observed state; `issue` never returns one.
    pub async fn issue(&mut self, url: Option<&str>, options: Option<&RequestOptions>) {
        let url = url.unwrap_or(&self.default_url).to_owned();
        let options = options
            .cloned()
            .unwrap_or_else(|| self.default_options.clone());
        let identity = options.identity(&url);

        if self.cache.is_fresh(&identity, self.cache_duration) {
            debug!(%url, "cache fresh, skipping request");
            return;
        }

        debug!(%url, "issuing request");
        self.begin(&identity);

        match self.transport.send(&url, &options).await {
            Ok(body) => match serde_json::from_str::<T>(&body) {
                Ok(value) => {
                    debug!(%url, "request settled ok");
                    self.cache.push(CacheEntry::new(identity.clone(), value.clone()));
                    self.settle_ok(&identity, value);
                }
                Err(err) => {
                    warn!(%url, error = %err, "response decode failed");
                    self.settle_err(&identity, QuarryError::Decode(err));
                }
            },
            Err(err) => {
                warn!(%url, error = %err, "request failed");
                self.settle_err(&identity, err);
            }
        }
    }

    /// Discard every cache entry. In-flight requests and the current request
    /// state are untouched.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The shared request state slot.
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn loading(&self) -> Option<bool> {
        self.state.loading()
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&QuarryError> {
        self.state.error()
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    /// Per-identity state for the given address/options, if `keyed_state` is
    /// enabled and the identity has been issued at least once.
    pub fn state_for(
        &self,
        url: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Option<&RequestState<T>> {
        let url = url.unwrap_or(&self.default_url);
        let options = options.unwrap_or(&self.default_options);
        self.keyed.get(&options.identity(url))
    }

    /// Value of the first (freshness-governing) cache entry for the given
    /// address/options, regardless of age. This is how callers read a value
    /// after `issue` skipped the network: the state slot may belong to a
    /// different identity, but the cache entry does not move.
    pub fn cached_value(&self, url: Option<&str>, options: Option<&RequestOptions>) -> Option<&T> {
        let url = url.unwrap_or(&self.default_url);
        let options = options.unwrap_or(&self.default_options);
        self.cache
            .first_match(&options.identity(url))
            .map(CacheEntry::value)
    }

    /// The underlying cache entries, in insertion order.
    pub fn cache_entries(&self) -> &[CacheEntry<T>] {
        self.cache.entries()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn begin(&mut self, identity: &str) {
        self.state.begin();
        if self.keyed_state {
            self.keyed.entry(identity.to_owned()).or_default().begin();
        }
    }

    fn settle_ok(&mut self, identity: &str, value: T) {
        if self.keyed_state {
            self.keyed
                .entry(identity.to_owned())
                .or_default()
                .settle_ok(value.clone());
        }
        self.state.settle_ok(value);
    }

    fn settle_err(&mut self, identity: &str, error: QuarryError) {
        let error = Arc::new(error);
        if self.keyed_state {
            self.keyed
                .entry(identity.to_owned())
                .or_default()
                .settle_err(Arc::clone(&error));
        }
        self.state.settle_err(error);
    }
}
