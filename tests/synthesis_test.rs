use vidstrat::scoring::score_candidate;
use vidstrat::synthesis::{
    action_items, hook_ideas, narrative_angle, outline, script, seo, summary,
};
use vidstrat::types::{CandidateVideo, ScoredInsight};

fn insight(id: &str, title: &str, views: u64) -> ScoredInsight {
    let video = CandidateVideo {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://videos.example/watch/{}", id),
        thumbnail_url: String::new(),
        channel_name: "Example Channel".to_string(),
        view_count: views,
        age: "4 days ago".to_string(),
        description: String::new(),
    };
    score_candidate(video, &[])
}

fn themes(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn summary_cites_top_insights_and_themes() {
    let insights = vec![
        insight("a", "Scaling a bakery", 2_000_000),
        insight("b", "Sourdough economics", 50_000),
    ];
    let text = summary("home baking", &themes(&["sourdough", "margins"]), &insights);

    assert!(text.contains("\"Scaling a bakery\" (2.0M views)"));
    assert!(text.contains("\"Sourdough economics\" (50.0K views)"));
    assert!(text.contains("sourdough, margins"));
}

#[test]
fn summary_omits_theme_sentence_without_themes() {
    let insights = vec![insight("a", "Scaling a bakery", 1_000)];
    let text = summary("home baking", &[], &insights);
    assert!(!text.contains("recurring themes"));
}

#[test]
fn hooks_are_three_and_respect_audience() {
    let with_audience = hook_ideas("home baking", &themes(&["sourdough"]), Some("new bakers"));
    assert_eq!(with_audience.len(), 3);
    for hook in &with_audience {
        assert!(hook.starts_with("new bakers: "), "missing audience prefix: {}", hook);
        assert!(hook.contains("home baking") || hook.contains("sourdough"));
    }

    let without_audience = hook_ideas("home baking", &[], None);
    assert_eq!(without_audience.len(), 3);
    assert!(without_audience.iter().all(|hook| !hook.contains(": ")));
    // Empty themes fall back to the named default.
    assert!(without_audience.iter().any(|hook| hook.contains("breakthroughs")));
}

#[test]
fn narrative_angle_uses_defaults_when_metadata_is_missing() {
    let angle = narrative_angle("home baking", &[], None, None);
    assert!(angle.contains("the biggest shift"));
    assert!(angle.contains("what top channels are doing differently"));
    assert!(angle.contains("engaging tone"));

    let styled = narrative_angle(
        "home baking",
        &themes(&["sourdough", "margins"]),
        Some("new bakers"),
        Some("playful tone"),
    );
    assert!(styled.contains("sourdough"));
    assert!(styled.contains("for new bakers"));
    assert!(styled.contains("playful tone"));
}

#[test]
fn outline_has_the_fixed_five_segment_schedule() {
    let segments = outline("home baking", &themes(&["sourdough", "margins", "equipment"]));
    assert_eq!(segments.len(), 5);

    assert_eq!(segments[0].title, "Hook & Context");
    assert_eq!(segments[0].timecode, "0:00 - 0:45");
    assert_eq!(segments[1].title, "Breakdown 1: Sourdough");
    assert_eq!(segments[1].timecode, "0:45 - 2:30");
    assert_eq!(segments[2].timecode, "2:30 - 4:00");
    assert_eq!(segments[3].timecode, "4:00 - 5:30");
    assert_eq!(segments[4].title, "Action Plan & CTA");
    assert_eq!(segments[4].timecode, "5:30 - 7:00");

    for segment in &segments {
        assert_eq!(segment.talking_points.len(), 3);
        assert_eq!(segment.broll_ideas.len(), 3);
    }
}

#[test]
fn outline_pads_missing_themes_with_defaults() {
    let segments = outline("home baking", &themes(&["sourdough"]));
    assert_eq!(segments.len(), 5);
    assert_eq!(segments[1].title, "Breakdown 1: Sourdough");
    assert_eq!(segments[2].title, "Breakdown 2: Insights");
    assert_eq!(
        segments[3].title,
        "Breakdown 3: The roadmap you can follow today"
    );
}

#[test]
fn script_sections_are_fixed_with_callouts_on_hook_and_cta() {
    let sections = script(
        "home baking",
        &themes(&["sourdough", "margins", "equipment"]),
        Some("new bakers"),
        Some("warm tone"),
    );

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Hook", "Segment 1", "Segment 2", "Segment 3", "Call To Action"]
    );

    assert!(sections[0].callout.is_some());
    assert!(sections[4].callout.is_some());
    for section in &sections[1..4] {
        assert!(section.callout.is_none());
    }
    for section in &sections {
        assert!(section.paragraphs.len() >= 2 && section.paragraphs.len() <= 3);
    }
    assert!(sections[1].paragraphs[0].contains("sourdough"));
    assert!(sections[2].paragraphs[0].contains("margins"));
    assert!(sections[3].paragraphs[0].contains("equipment"));
}

#[test]
fn seo_block_builds_titles_description_and_capped_tags() {
    let keyword_list: Vec<String> = (0..15).map(|i| format!("keyword{}", i)).collect();
    let block = seo("home baking", &themes(&["sourdough", "margins"]), &keyword_list);

    assert_eq!(block.title_ideas.len(), 3);
    assert!(block.title_ideas.iter().any(|t| t.contains("Sourdough")));
    assert!(block.tags.len() <= 12);
    assert_eq!(block.tags[0], "sourdough");
    assert_eq!(block.tags[1], "margins");
    assert!(block.description.contains("home baking"));
    assert!(block.description.contains("sourdough"));
}

#[test]
fn seo_titles_fall_back_to_the_playbook() {
    let block = seo("home baking", &[], &[]);
    assert!(block.title_ideas.iter().any(|t| t.contains("The Playbook")));
    assert!(block.tags.is_empty());
}

#[test]
fn seo_tags_deduplicate_theme_keyword_overlap() {
    let block = seo(
        "home baking",
        &themes(&["sourdough"]),
        &["sourdough".to_string(), "margins".to_string()],
    );
    assert_eq!(block.tags, vec!["sourdough", "margins"]);
}

#[test]
fn action_items_name_reference_videos_or_fall_back() {
    let insights = vec![
        insight("a", "Scaling a bakery", 2_000_000),
        insight("b", "Sourdough economics", 50_000),
        insight("c", "Oven deep dive", 9_000),
        insight("d", "Should not appear", 10),
    ];
    let items = action_items("home baking", &themes(&["sourdough"]), &insights);
    assert_eq!(items.len(), 3);
    assert!(items[2].contains("\"Scaling a bakery\""));
    assert!(items[2].contains("\"Oven deep dive\""));
    assert!(!items[2].contains("Should not appear"));

    let fallback = action_items("home baking", &[], &[]);
    assert_eq!(fallback.len(), 3);
    assert!(fallback[2].contains("reference videos"));
    assert!(fallback[1].contains("breakthroughs"));
}
