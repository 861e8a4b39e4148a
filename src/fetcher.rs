use crate::provider::SearchProvider;
use crate::types::{CandidateVideo, Result, StrategistError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Retrieves the candidate set for a topic by fanning out over three
/// query variants and merging the results.
pub struct CandidateFetcher {
    provider: Arc<dyn SearchProvider>,
}

impl CandidateFetcher {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Run the raw topic, `"<topic> trending"` and `"best <topic>"`
    /// queries concurrently (one page each, fail-fast) and deduplicate
    /// the concatenation by video id, first occurrence wins. Primary
    /// results are concatenated first, so they take precedence when the
    /// same video shows up under several variants.
    pub async fn fetch(&self, topic: &str) -> Result<Vec<CandidateVideo>> {
        let trending_query = format!("{} trending", topic);
        let best_query = format!("best {}", topic);

        debug!("Fetching candidates for topic {:?}", topic);

        let (primary, trending, best) = tokio::try_join!(
            self.provider.search(topic, 1),
            self.provider.search(&trending_query, 1),
            self.provider.search(&best_query, 1),
        )?;

        let total = primary.videos.len() + trending.videos.len() + best.videos.len();

        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut candidates: Vec<CandidateVideo> = Vec::new();
        for raw in primary
            .videos
            .into_iter()
            .chain(trending.videos)
            .chain(best.videos)
        {
            let candidate = CandidateVideo::from(raw);
            if seen_ids.insert(candidate.id.clone()) {
                candidates.push(candidate);
            }
        }

        if candidates.is_empty() {
            return Err(StrategistError::NoResults);
        }

        info!(
            "Fetched {} candidates for {:?} ({} unique after dedup)",
            total,
            topic,
            candidates.len()
        );
        Ok(candidates)
    }
}
