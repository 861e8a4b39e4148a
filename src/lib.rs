pub mod fetcher;
pub mod keywords;
pub mod pipeline;
pub mod provider;
pub mod scoring;
pub mod synthesis;
pub mod types;

pub use fetcher::CandidateFetcher;
pub use pipeline::StrategyPipeline;
pub use provider::{
    HttpSearchProvider, ProviderConfig, RawAuthor, RawVideo, SearchProvider, SearchResponse,
};
pub use types::*;
