use crate::types::{CandidateVideo, Result, StrategistError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// External video-search source. One call covers one query and one page
/// of results; the fetcher fans out over query variants.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, pages: u32) -> Result<SearchResponse>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub videos: Vec<RawVideo>,
}

/// A video exactly as the provider serialized it. Every field the
/// provider is allowed to omit is optional here; named defaults are
/// applied in the conversion to `CandidateVideo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    #[serde(default)]
    pub video_id: Option<String>,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub ago: Option<String>,
    #[serde(default)]
    pub author: Option<RawAuthor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RawVideo> for CandidateVideo {
    fn from(raw: RawVideo) -> Self {
        // Thumbnail falls back thumbnail -> image -> empty; a missing
        // videoId dedups on the URL, which is stable per snapshot.
        let thumbnail_url = raw.thumbnail.or(raw.image).unwrap_or_default();
        Self {
            id: raw.video_id.unwrap_or_else(|| raw.url.clone()),
            title: raw.title,
            url: raw.url,
            thumbnail_url,
            channel_name: raw
                .author
                .and_then(|author| author.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            view_count: raw.views.unwrap_or(0),
            age: raw.ago.unwrap_or_else(|| "Unknown".to_string()),
            description: raw.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/api/search".to_string(),
            user_agent: "Vidstrat/0.1".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// JSON-over-HTTP implementation of `SearchProvider`.
///
/// Issues `GET <endpoint>?q=<query>&pages=<pages>` and expects a
/// `{"videos": [...]}` body. No retries: a failed call fails the request
/// and the caller surfaces it as a provider error.
pub struct HttpSearchProvider {
    client: Client,
    endpoint: Url,
}

impl HttpSearchProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(&self, query: &str, pages: u32) -> Result<SearchResponse> {
        debug!("Searching provider: query={:?}, pages={}", query, pages);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query), ("pages", &pages.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StrategistError::Provider(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: SearchResponse = response.json().await?;
        debug!("Provider returned {} videos for {:?}", body.videos.len(), query);
        Ok(body)
    }
}
