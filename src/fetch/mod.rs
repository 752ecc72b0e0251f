// Fetch cache module.
// Generic request/response caching with time-based invalidation and a
// three-state request lifecycle shared by every API call.

pub mod cache;
pub mod fetcher;
pub mod state;

pub use cache::{CacheEntry, CacheList};
pub use fetcher::{DEFAULT_CACHE_DURATION, FetchCache, FetchConfig};
pub use state::RequestState;
