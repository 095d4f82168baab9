//! RemoteBackend: POST the request to `humidor serve`.

use async_trait::async_trait;
use humidor::{ErrorResponse, RecommendRequest, RecommendResponse};
use tracing::debug;

use super::SearchBackend;
use crate::CliError;

pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8787`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/recommend", self.base_url)
    }
}

#[async_trait]
impl SearchBackend for RemoteBackend {
    async fn search(&self, request: &RecommendRequest) -> Result<RecommendResponse, CliError> {
        let url = self.endpoint();
        debug!(%url, cigar = %request.cigar, avoid = request.avoid.len(), "POST");
        let resp = self.client.post(&url).json(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(CliError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<RecommendResponse>().await?)
    }
}
