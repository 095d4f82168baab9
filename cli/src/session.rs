//! A search session: remembers what it has shown and sends it back as `avoid`.

use std::sync::Arc;

use humidor::{RecommendRequest, RecommendResponse, SeenList};
use tracing::warn;

use crate::render::{render_cards, status_line};
use crate::{CliError, SearchBackend};

pub const EMPTY_QUERY: &str = "Please enter a cigar name.";
pub const FAILURE: &str = "Sorry, something went wrong.";

/// What one query produced.
#[derive(Debug)]
pub enum Outcome {
    EmptyQuery,
    Found(RecommendResponse),
    Failed(CliError),
}

impl Outcome {
    pub fn status(&self) -> String {
        match self {
            Outcome::EmptyQuery => EMPTY_QUERY.to_string(),
            Outcome::Found(resp) => status_line(resp.recommendations.len()),
            Outcome::Failed(_) => FAILURE.to_string(),
        }
    }

    /// Cards (or the response as JSON) followed by the status line.
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        let body = match self {
            Outcome::Found(resp) if json => serde_json::to_string_pretty(resp)?,
            Outcome::Found(resp) if !resp.recommendations.is_empty() => {
                format!("{}\n\n{}", render_cards(&resp.recommendations), self.status())
            }
            _ => self.status(),
        };
        Ok(body)
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Found(_))
    }
}

pub struct Session {
    backend: Arc<dyn SearchBackend>,
    seen: SeenList,
}

impl Session {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            seen: SeenList::new(),
        }
    }

    pub fn seen(&self) -> &SeenList {
        &self.seen
    }

    /// Searches for `query` avoiding everything shown so far, then adds the new names.
    pub async fn search(&mut self, query: &str) -> Outcome {
        let query = query.trim();
        if query.is_empty() {
            return Outcome::EmptyQuery;
        }
        let request = RecommendRequest::new(query, self.seen.as_slice().to_vec());
        match self.backend.search(&request).await {
            Ok(resp) => {
                self.seen.extend(
                    resp.recommendations
                        .iter()
                        .filter(|r| !r.is_placeholder())
                        .map(|r| r.name.as_str()),
                );
                Outcome::Found(resp)
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                Outcome::Failed(e)
            }
        }
    }
}
