//! Library side of the `humidor` binary: search backends, card rendering and the
//! interactive session that keeps the seen list.

pub mod backend;
mod error;
pub mod render;
mod session;

pub use backend::{LocalBackend, RemoteBackend, SearchBackend};
pub use error::CliError;
pub use render::{render_card, render_cards, status_line, strength_bar};
pub use session::{Outcome, Session, EMPTY_QUERY, FAILURE};

/// Default server URL for remote search.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8787";

/// Picks the server URL: explicit `url`, then `HUMIDOR_URL`, then [`DEFAULT_SERVER_URL`].
pub fn resolve_server_url(url: Option<&str>) -> String {
    url.map(str::to_string)
        .or_else(|| std::env::var("HUMIDOR_URL").ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}
