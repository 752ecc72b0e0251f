//! # quarry
//!
//! Client-side data layer for a commit search UI: a generic fetch cache with
//! time-based invalidation, request deduplication by canonical identity, and
//! a three-state request lifecycle, plus typed bindings for the search
//! proxy's endpoints.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use quarry::{FetchCache, FetchConfig, HttpTransport};
//! use quarry::api::CommitsSearch;
//!
//! # async fn run() -> quarry::Result<()> {
//! let transport = HttpTransport::new("http://localhost:3000")?;
//! let mut commits: FetchCache<CommitsSearch, _> =
//!     FetchCache::new(transport, FetchConfig::new("/", Duration::from_secs(60)));
//!
//! commits.issue(Some("/search/fix"), None).await;
//! if let Some(results) = commits.data() {
//!     println!("{} commits", results.total_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod fetch;
pub mod transport;

pub use error::{QuarryError, Result};
pub use fetch::{CacheEntry, FetchCache, FetchConfig, RequestState};
pub use transport::{HttpTransport, Method, RequestOptions, Transport};
