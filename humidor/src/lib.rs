//! # Humidor
//!
//! Cigar recommendations from a large language model, filtered for the US market.
//!
//! A request names one cigar plus the names the user has already seen. The [`Recommender`]
//! asks the model for three similar cigars, then cleans the reply: boilerplate prose is
//! stripped, strength is clamped into 1–10, avoided and duplicate records are removed,
//! Cuban cigars are dropped by the [`market`] filter and the result is shuffled and padded
//! so there are always exactly three. Each record gets retailer search links.
//!
//! ## Main modules
//!
//! - [`recommender`]: [`Recommender`], the end-to-end pipeline.
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`market`]: [`is_cuban`], [`MarketRule`], [`filter_market`] (fails open).
//! - [`normalize`]: boilerplate stripping, dedup, shuffle and padding.
//! - [`parse`]: JSON extraction from model output.
//! - [`prompt`]: system and user prompts.
//! - [`item`]: [`Recommendation`], [`PriceTier`], [`Strength`].
//! - [`seen`]: [`SeenList`] (client) and [`AvoidList`] (server).
//! - [`protocol`]: request/response bodies of `POST /recommend`.
//! - [`settings`]: [`RecommenderConfig`] from the environment.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use humidor::{RecommendRequest, Recommender, RecommenderConfig};
//!
//! # async fn run() -> Result<(), humidor::RecommendError> {
//! let recommender = Recommender::from_config(RecommenderConfig::from_env());
//! let resp = recommender
//!     .recommend(&RecommendRequest::new("Padron 1964 Anniversary", vec![]))
//!     .await?;
//! for rec in &resp.recommendations {
//!     println!("{} ({})", rec.name, rec.brand);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fallback;
pub mod item;
pub mod llm;
pub mod market;
pub mod normalize;
pub mod parse;
pub mod prompt;
pub mod protocol;
pub mod recommender;
pub mod retail;
pub mod seen;
pub mod settings;

pub use error::{LlmError, MarketError, RecommendError};
pub use item::{PriceTier, Recommendation, RetailLink, Strength};
pub use llm::{ChatOpenAI, CompletionRequest, LlmClient, MockLlm};
pub use market::{filter_market, is_cuban, MarketMetadata, MarketRule, UsMarket};
pub use normalize::{strip_boilerplate, RESULT_COUNT};
pub use protocol::{ErrorResponse, RecommendRequest, RecommendResponse};
pub use recommender::Recommender;
pub use seen::{AvoidList, SeenList, SEEN_CAP};
pub use settings::RecommenderConfig;
