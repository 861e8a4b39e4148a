use vidstrat::scoring::{
    age_score, format_views, parse_age_minutes, rank, relevance, score_candidate, view_score,
};
use vidstrat::types::CandidateVideo;

fn candidate(id: &str, title: &str, views: u64, age: &str, description: &str) -> CandidateVideo {
    CandidateVideo {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://videos.example/watch/{}", id),
        thumbnail_url: String::new(),
        channel_name: "Example Channel".to_string(),
        view_count: views,
        age: age.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn age_descriptors_parse_to_minutes() {
    assert_eq!(parse_age_minutes("2 days ago"), 2880.0);
    assert_eq!(parse_age_minutes("1 hour ago"), 60.0);
    assert_eq!(parse_age_minutes("5 minutes ago"), 5.0);
    assert_eq!(parse_age_minutes("3 weeks ago"), 30_240.0);
    assert_eq!(parse_age_minutes("1 year ago"), 525_600.0);
}

#[test]
fn age_parser_skips_leading_noise() {
    // Live-stream descriptors prefix the age with extra words.
    assert_eq!(parse_age_minutes("Streamed 3 days ago"), 4320.0);
}

#[test]
fn unparseable_age_assumes_stale() {
    assert_eq!(parse_age_minutes("Unknown"), 525_600.0);
    assert_eq!(parse_age_minutes(""), 525_600.0);
    assert_eq!(parse_age_minutes("Premieres soon"), 525_600.0);
}

#[test]
fn view_score_is_monotonic_in_views() {
    assert!(view_score(100_000) > view_score(1_000));
    assert!(view_score(1_000) > view_score(0));
}

#[test]
fn age_score_never_increases_with_age() {
    assert!(age_score(60.0) > age_score(1_440.0));
    assert!(age_score(1_440.0) > age_score(525_600.0));
}

#[test]
fn relevance_is_the_matched_fraction() {
    let video = candidate("a", "Rust async runtimes compared", 10, "1 day ago", "");
    let keywords = vec!["rust".to_string(), "zebra".to_string()];
    assert_eq!(relevance(&video, &keywords), 0.5);
}

#[test]
fn relevance_defaults_to_neutral_without_keywords() {
    let video = candidate("a", "Anything at all", 10, "1 day ago", "");
    assert_eq!(relevance(&video, &[]), 0.3);
}

#[test]
fn ranking_is_sorted_and_capped_at_twelve() {
    let candidates: Vec<CandidateVideo> = (0..15)
        .map(|i| {
            candidate(
                &format!("v{}", i),
                "Sample upload",
                1_000 * (i + 1),
                "3 days ago",
                "",
            )
        })
        .collect();

    let insights = rank(candidates, &[]);
    assert_eq!(insights.len(), 12);
    for pair in insights.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Highest view count wins when age and relevance are equal.
    assert_eq!(insights[0].video.id, "v14");
}

#[test]
fn highlights_carry_views_age_and_matches() {
    let video = candidate(
        "a",
        "Best AI Tools 2025",
        2_000_000,
        "2 days ago",
        "Practical tools for small business",
    );
    let keywords = vec!["tools".to_string(), "business".to_string()];
    let insight = score_candidate(video, &keywords);

    assert_eq!(insight.highlights[0], "2.0M views");
    assert_eq!(insight.highlights[1], "2 days ago");
    assert!(insight.highlights.contains(&"tools".to_string()));
    assert_eq!(insight.relevance, 1.0);
}

#[test]
fn view_counts_format_human_readable() {
    assert_eq!(format_views(2_000_000), "2.0M");
    assert_eq!(format_views(12_500), "12.5K");
    assert_eq!(format_views(1_000), "1.0K");
    assert_eq!(format_views(900), "900");
    assert_eq!(format_views(0), "0");
}
