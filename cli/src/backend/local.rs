//! LocalBackend: run the recommender in-process.

use async_trait::async_trait;
use humidor::{RecommendRequest, RecommendResponse, Recommender, RecommenderConfig};

use super::SearchBackend;
use crate::CliError;

pub struct LocalBackend {
    recommender: Recommender,
}

impl LocalBackend {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }

    /// Backend configured from `OPENAI_*` / `HUMIDOR_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(Recommender::from_config(RecommenderConfig::from_env()))
    }
}

#[async_trait]
impl SearchBackend for LocalBackend {
    async fn search(&self, request: &RecommendRequest) -> Result<RecommendResponse, CliError> {
        Ok(self.recommender.recommend(request).await?)
    }
}
