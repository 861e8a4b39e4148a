use crate::types::{CandidateVideo, ScoredInsight};
use tracing::debug;

/// "Assume stale": age descriptors that cannot be parsed count as a year old.
const STALE_FALLBACK_MINUTES: f64 = 525_600.0;

/// Characteristic decay of the age score, 21 days in minutes.
const DECAY_MINUTES: f64 = 30_240.0;

/// Neutral relevance when no keywords were supplied, so short or
/// degenerate topics do not zero out every composite score.
const NEUTRAL_RELEVANCE: f64 = 0.3;

/// How many insights survive ranking for downstream synthesis.
pub const INSIGHT_CAP: usize = 12;

const VIEW_WEIGHT: f64 = 0.6;
const AGE_WEIGHT: f64 = 0.3;
const RELEVANCE_WEIGHT: f64 = 0.4;

/// Parse a free-text relative age ("3 days ago", "streamed 2 weeks ago")
/// into minutes. The first integer token is taken as the amount and the
/// first recognized unit after it as the unit; anything unparseable
/// falls back to one year.
pub fn parse_age_minutes(descriptor: &str) -> f64 {
    let lowered = descriptor.to_lowercase();
    let mut amount: Option<f64> = None;

    for token in lowered.split_whitespace() {
        match amount {
            None => {
                if let Ok(value) = token.parse::<f64>() {
                    amount = Some(value);
                }
            }
            Some(value) => {
                if let Some(multiplier) = unit_minutes(token) {
                    return value * multiplier;
                }
            }
        }
    }

    STALE_FALLBACK_MINUTES
}

fn unit_minutes(token: &str) -> Option<f64> {
    // Prefix match covers plurals ("days") without a stemmer.
    if token.starts_with("second") {
        Some(1.0 / 60.0)
    } else if token.starts_with("minute") {
        Some(1.0)
    } else if token.starts_with("hour") {
        Some(60.0)
    } else if token.starts_with("day") {
        Some(1_440.0)
    } else if token.starts_with("week") {
        Some(10_080.0)
    } else if token.starts_with("month") {
        Some(43_200.0)
    } else if token.starts_with("year") {
        Some(525_600.0)
    } else {
        None
    }
}

/// Dampen the multi-order-of-magnitude spread in view counts into a
/// small comparable range.
pub fn view_score(views: u64) -> f64 {
    ((views as f64) + 1.0).log10() / 6.0
}

/// Exponential down-weighting with a roughly three-week half-life.
pub fn age_score(age_minutes: f64) -> f64 {
    (-age_minutes / DECAY_MINUTES).exp()
}

/// Fraction of the supplied keywords appearing anywhere in
/// `title + " " + description`, case-insensitive.
pub fn relevance(candidate: &CandidateVideo, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return NEUTRAL_RELEVANCE;
    }

    let haystack = format!("{} {}", candidate.title, candidate.description).to_lowercase();
    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count();

    matched as f64 / keywords.len() as f64
}

fn matched_keywords(candidate: &CandidateVideo, keywords: &[String]) -> Vec<String> {
    let haystack = format!("{} {}", candidate.title, candidate.description).to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .cloned()
        .collect()
}

/// Score a single candidate against the request keywords.
pub fn score_candidate(candidate: CandidateVideo, keywords: &[String]) -> ScoredInsight {
    let views = view_score(candidate.view_count);
    let age = age_score(parse_age_minutes(&candidate.age));
    let relevance = relevance(&candidate, keywords);

    // A blend, not a probability: the weights intentionally exceed 1.
    let score = VIEW_WEIGHT * views + AGE_WEIGHT * age + RELEVANCE_WEIGHT * relevance;

    let mut highlights = vec![format!("{} views", format_views(candidate.view_count))];
    if candidate.age != "Unknown" {
        highlights.push(candidate.age.clone());
    }
    highlights.extend(matched_keywords(&candidate, keywords).into_iter().take(3));

    ScoredInsight {
        video: candidate,
        score,
        relevance,
        highlights,
    }
}

/// Rank candidates by composite score and keep the top 12. The stable
/// sort is the only tie-break. This capped list is the canonical insight
/// set every generator consumes.
pub fn rank(candidates: Vec<CandidateVideo>, keywords: &[String]) -> Vec<ScoredInsight> {
    let total = candidates.len();
    let mut insights: Vec<ScoredInsight> = candidates
        .into_iter()
        .map(|candidate| score_candidate(candidate, keywords))
        .collect();

    insights.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    insights.truncate(INSIGHT_CAP);

    debug!("Ranked {} candidates, kept {}", total, insights.len());
    insights
}

/// Human-readable view counts: 2_000_000 -> "2.0M", 12_500 -> "12.5K".
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}
