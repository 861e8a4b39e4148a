use crate::fetcher::CandidateFetcher;
use crate::keywords::{extract_themes, tokenize};
use crate::provider::SearchProvider;
use crate::scoring;
use crate::synthesis;
use crate::types::{Result, StrategistError, StrategyDocument, TopicRequest};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Single-shot orchestration: validate, fetch, rank, extract themes,
/// synthesize, assemble. Holds no per-request state; every call builds
/// its own candidate set and document, so identical requests against an
/// unchanged provider snapshot yield identical documents.
pub struct StrategyPipeline {
    fetcher: CandidateFetcher,
}

impl StrategyPipeline {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            fetcher: CandidateFetcher::new(provider),
        }
    }

    pub async fn generate(&self, request: &TopicRequest) -> Result<StrategyDocument> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            // Validation failure: reported before any provider call.
            return Err(StrategistError::EmptyTopic);
        }

        let request_id = Uuid::new_v4();
        info!("Generating strategy document (request {}, topic {:?})", request_id, topic);

        // Fallback keywords for relevance scoring come from the topic
        // plus the optional free-text description.
        let mut keyword_seed = topic.to_string();
        if let Some(description) = &request.description {
            keyword_seed.push(' ');
            keyword_seed.push_str(description);
        }
        let keywords = tokenize(&keyword_seed);
        debug!("Request {} keywords: {:?}", request_id, keywords);

        let candidates = self.fetcher.fetch(topic).await?;
        let insights = scoring::rank(candidates, &keywords);
        let themes = extract_themes(&insights);
        debug!("Request {} themes: {:?}", request_id, themes);

        let document = synthesis::build_document(request, &keywords, themes, insights);
        info!(
            "Request {} complete: {} insights, {} themes",
            request_id,
            document.inspiration.len(),
            document.themes.len()
        );
        Ok(document)
    }
}
