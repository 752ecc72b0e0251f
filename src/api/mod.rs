// Upstream API module.
// Typed payloads, query encoding, and a session consumer for the commit
// search proxy endpoints.

pub mod endpoints;
pub mod params;
pub mod session;
pub mod types;

pub use endpoints::{code_path, search_path};
pub use params::{SearchParams, append_query, upstream_query};
pub use session::SearchSession;
pub use types::*;
