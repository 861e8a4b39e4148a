use serde::{Deserialize, Serialize};

/// Incoming topic submission from the presentation layer.
///
/// `topic` must be non-empty after trimming; everything else is optional
/// metadata that flows through to the generators and the document echo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
    pub description: Option<String>,
    pub audience: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub language: Option<String>,
}

impl TopicRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            description: None,
            audience: None,
            style: None,
            duration: None,
            language: None,
        }
    }
}

/// One video record as the search provider returned it, after named
/// defaults have been filled in (see `provider::RawVideo`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateVideo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub view_count: u64,
    /// Free-text relative age straight from the provider, e.g. "3 days ago".
    pub age: String,
    pub description: String,
}

/// A scored, ranked candidate retained for synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredInsight {
    #[serde(flatten)]
    pub video: CandidateVideo,
    pub score: f64,
    /// Fraction of the request keywords found in title + description, in [0, 1].
    pub relevance: f64,
    pub highlights: Vec<String>,
}

/// One timed segment of the video outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSegment {
    pub title: String,
    pub timecode: String,
    pub talking_points: Vec<String>,
    pub broll_ideas: Vec<String>,
}

/// One section of the generated script. Only the hook and the call to
/// action carry a delivery callout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSection {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoBlock {
    pub title_ideas: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
}

/// Echo of the request fields, carried on the document for the
/// presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMetadata {
    pub topic: String,
    pub description: Option<String>,
    pub audience: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub language: Option<String>,
}

/// The complete synthesized output for one request. Built once, never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDocument {
    pub summary: String,
    pub hook_ideas: Vec<String>,
    pub narrative_angle: String,
    pub themes: Vec<String>,
    pub action_items: Vec<String>,
    pub seo: SeoBlock,
    pub outline: Vec<OutlineSegment>,
    pub script: Vec<ScriptSection>,
    pub inspiration: Vec<ScoredInsight>,
    pub metadata: StrategyMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum StrategistError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("No videos found for this topic")]
    NoResults,

    #[error("Search provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StrategistError {
    /// Status class the presentation layer should report this error as.
    pub fn http_status(&self) -> u16 {
        match self {
            StrategistError::EmptyTopic => 400,
            StrategistError::NoResults => 404,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, StrategistError>;
