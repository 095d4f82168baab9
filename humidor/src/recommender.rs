//! The recommendation pipeline: prompt → completion → parse → filter → normalize.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::RecommendError;
use crate::fallback::fallback_recommendations;
use crate::item::Recommendation;
use crate::llm::{CompletionRequest, LlmClient};
use crate::market::{filter_market, MarketRule, UsMarket};
use crate::normalize::{clean_item, dedup_by_name_and_brand, drop_avoided, finalize, Candidate};
use crate::parse::parse_reply;
use crate::prompt::{system_prompt, user_prompt, SEED_RANGE};
use crate::protocol::{RecommendRequest, RecommendResponse};
use crate::retail::attach_links;
use crate::seen::AvoidList;
use crate::settings::RecommenderConfig;

/// Turns one [`RecommendRequest`] into exactly three recommendations.
///
/// Holds no per-request state; share it behind an `Arc` across requests.
pub struct Recommender {
    llm: Option<Arc<dyn LlmClient>>,
    config: RecommenderConfig,
    rule: Arc<dyn MarketRule>,
}

impl Recommender {
    /// Recommender over an explicit client. `None` makes every request fail with
    /// [`RecommendError::MissingApiKey`].
    pub fn new(llm: Option<Arc<dyn LlmClient>>, config: RecommenderConfig) -> Self {
        Self {
            llm,
            config,
            rule: Arc::new(UsMarket),
        }
    }

    /// Recommender with the OpenAI client described by `config`.
    pub fn from_config(config: RecommenderConfig) -> Self {
        let llm = config.build_client();
        Self::new(llm, config)
    }

    /// Replaces the market rule (default [`UsMarket`]).
    pub fn with_market_rule(mut self, rule: Arc<dyn MarketRule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn has_client(&self) -> bool {
        self.llm.is_some()
    }

    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, RecommendError> {
        let mut rng = StdRng::from_entropy();
        self.recommend_with_rng(request, &mut rng).await
    }

    /// [`recommend`](Self::recommend) with a caller-supplied RNG for the seed and shuffle.
    pub async fn recommend_with_rng<R>(
        &self,
        request: &RecommendRequest,
        rng: &mut R,
    ) -> Result<RecommendResponse, RecommendError>
    where
        R: Rng + Send,
    {
        let cigar = request.cigar.trim();
        if cigar.is_empty() {
            return Err(RecommendError::InvalidInput);
        }
        let Some(llm) = self.llm.as_ref() else {
            warn!("no OPENAI_API_KEY configured");
            return Err(RecommendError::MissingApiKey);
        };

        let avoid = request.avoid_list();
        let seed = rng.gen_range(0..SEED_RANGE);
        let completion = CompletionRequest {
            system: system_prompt(seed, &avoid),
            user: user_prompt(cigar),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            json_object: true,
        };

        let content = match llm.complete(&completion).await {
            Ok(content) => content,
            Err(e) => {
                let err = RecommendError::from(e);
                if self.config.fallback_on_upstream_error
                    && matches!(err, RecommendError::Upstream(_))
                {
                    warn!(error = %err, "upstream failed, serving fallback list");
                    return Ok(RecommendResponse {
                        recommendations: self.fallback(&avoid, rng),
                    });
                }
                return Err(err);
            }
        };

        Ok(RecommendResponse {
            recommendations: self.shape(&content, &avoid, rng),
        })
    }

    /// Parse, filter and normalize the model's reply.
    fn shape<R: Rng + ?Sized>(
        &self,
        content: &str,
        avoid: &AvoidList,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let raw = drop_avoided(parse_reply(content), avoid);
        let candidates: Vec<Candidate> = raw
            .into_iter()
            .map(clean_item)
            .filter(|c| !c.recommendation.name.is_empty())
            .collect();
        let cleaned = candidates.len();

        let kept = filter_market(candidates, self.rule.as_ref(), Candidate::market_metadata);
        let unique = dedup_by_name_and_brand(kept.into_iter().map(|c| c.recommendation).collect());
        let mut out = finalize(unique, rng);
        attach_links(&mut out);

        info!(input = cleaned, output = out.len(), "US filter summary");
        out
    }

    fn fallback<R: Rng + ?Sized>(&self, avoid: &AvoidList, rng: &mut R) -> Vec<Recommendation> {
        let mut out = finalize(fallback_recommendations(avoid), rng);
        attach_links(&mut out);
        out
    }
}
