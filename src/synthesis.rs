//! Deterministic generators for every section of the strategy document.
//!
//! All functions here are pure transforms over (topic, themes, insights,
//! optional audience/tone). When the theme set is short they degrade to
//! positional defaults instead of failing, so a thin candidate pool still
//! produces a complete document.

use crate::scoring::format_views;
use crate::types::{
    OutlineSegment, ScoredInsight, ScriptSection, SeoBlock, StrategyDocument, StrategyMetadata,
    TopicRequest,
};

const DEFAULT_TONE: &str = "engaging tone";

fn theme_or<'a>(themes: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    themes.get(index).map(String::as_str).unwrap_or(fallback)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Cites the top 3 insights by title and view count, plus a themes
/// sentence (omitted when there are no themes).
pub fn summary(topic: &str, themes: &[String], insights: &[ScoredInsight]) -> String {
    let cited: Vec<String> = insights
        .iter()
        .take(3)
        .map(|insight| {
            format!(
                "\"{}\" ({} views)",
                insight.video.title,
                format_views(insight.video.view_count)
            )
        })
        .collect();

    let mut summary = if cited.is_empty() {
        format!("Creators covering \"{}\" are an open field right now.", topic)
    } else {
        format!(
            "Creators covering \"{}\" are pulling serious attention right now. Standout uploads include {}.",
            topic,
            cited.join(", ")
        )
    };

    if !themes.is_empty() {
        let top_themes: Vec<&str> = themes.iter().take(3).map(String::as_str).collect();
        summary.push_str(&format!(
            " The recurring themes across these videos: {}.",
            top_themes.join(", ")
        ));
    }

    summary
}

/// Exactly 3 hook sentences. The audience phrase is prefixed only when
/// an audience was supplied.
pub fn hook_ideas(topic: &str, themes: &[String], audience: Option<&str>) -> Vec<String> {
    let prefix = audience
        .map(|audience| format!("{}: ", audience))
        .unwrap_or_default();
    let theme = theme_or(themes, 0, "breakthroughs");

    vec![
        format!(
            "{}The {} in {} nobody is talking about yet.",
            prefix, theme, topic
        ),
        format!(
            "{}I went through the most-watched {} videos so you don't have to.",
            prefix, topic
        ),
        format!(
            "{}Three minutes on {} that will change how you think about {}.",
            prefix, topic, theme
        ),
    ]
}

/// One sentence positioning the video around the two leading themes.
pub fn narrative_angle(
    topic: &str,
    themes: &[String],
    audience: Option<&str>,
    tone: Option<&str>,
) -> String {
    let lead = theme_or(themes, 0, "the biggest shift");
    let contrast = theme_or(themes, 1, "what top channels are doing differently");
    let tone = tone.unwrap_or(DEFAULT_TONE);
    let audience_clause = audience
        .map(|audience| format!(" for {}", audience))
        .unwrap_or_default();

    format!(
        "Position the video around {} and contrast it with {}, telling the {} story{} in a {}.",
        lead, contrast, topic, audience_clause, tone
    )
}

/// Positional theme defaults shared by the outline and the storyboard
/// action item when fewer than 3 themes were extracted.
const THEME_DEFAULTS: [&str; 3] = [
    "breakthroughs",
    "insights",
    "the roadmap you can follow today",
];

// Hand-assigned schedule for the breakdown segments. Not derived from a
// formula; keep the literal table.
const BREAKDOWN_TIMECODES: [&str; 3] = ["0:45 - 2:30", "2:30 - 4:00", "4:00 - 5:30"];

/// The fixed 5-segment outline: hook, three theme breakdowns, CTA.
pub fn outline(topic: &str, themes: &[String]) -> Vec<OutlineSegment> {
    let mut segments = vec![OutlineSegment {
        title: "Hook & Context".to_string(),
        timecode: "0:00 - 0:45".to_string(),
        talking_points: vec![
            format!("Cold open: the single most surprising fact about {}", topic),
            "Why this matters right now".to_string(),
            "What the viewer will walk away with".to_string(),
        ],
        broll_ideas: vec![
            format!("Fast-paced montage of {} clips", topic),
            "Headline screenshots with quick zooms".to_string(),
            "Presenter walk-on with title card".to_string(),
        ],
    }];

    for (index, timecode) in BREAKDOWN_TIMECODES.iter().enumerate() {
        let theme = theme_or(themes, index, THEME_DEFAULTS[index]);
        segments.push(OutlineSegment {
            title: format!("Breakdown {}: {}", index + 1, capitalize_first(theme)),
            timecode: timecode.to_string(),
            talking_points: vec![
                format!("What \"{}\" actually means in practice", theme),
                format!("Where most videos get {} wrong", theme),
                format!("A concrete example of {} in action", theme),
            ],
            broll_ideas: vec![
                format!("Screen recording walking through {}", theme),
                format!("Quick cutaway montage themed on {}", theme),
                format!("On-screen keyword card reading \"{}\"", theme),
            ],
        });
    }

    segments.push(OutlineSegment {
        title: "Action Plan & CTA".to_string(),
        timecode: "5:30 - 7:00".to_string(),
        talking_points: vec![
            "Recap the three breakdowns in one line each".to_string(),
            format!("The first step viewers can take on {} today", topic),
            "Ask which theme hit home in the comments".to_string(),
        ],
        broll_ideas: vec![
            "Presenter direct to camera".to_string(),
            "End screen with subscribe overlay".to_string(),
            "Preview card for a related video".to_string(),
        ],
    });

    segments
}

/// Exactly 5 script sections in order: Hook, Segments 1-3, Call To
/// Action. The hook and CTA carry a delivery callout; segments do not.
pub fn script(
    topic: &str,
    themes: &[String],
    audience: Option<&str>,
    tone: Option<&str>,
) -> Vec<ScriptSection> {
    let lead = theme_or(themes, 0, "the game-changing shift");
    let second = theme_or(themes, 1, "what top channels are doing differently");
    let third = theme_or(themes, 2, "the roadmap you can follow today");
    let tone = tone.unwrap_or(DEFAULT_TONE);
    let audience = audience.unwrap_or("your audience");

    vec![
        ScriptSection {
            title: "Hook".to_string(),
            paragraphs: vec![
                format!(
                    "If you care about {}, the next few minutes are for you. Everyone is circling {}, but almost nobody explains what it changes for {}.",
                    topic, lead, audience
                ),
                format!(
                    "Keep the delivery in a {} and promise the payoff up front: by the end, {} will know exactly what to do next.",
                    tone, audience
                ),
            ],
            callout: Some("Deliver the first line looking straight into the lens.".to_string()),
        },
        ScriptSection {
            title: "Segment 1".to_string(),
            paragraphs: vec![
                format!(
                    "Start with {}. Lay out what it is, why it surfaced across so many {} videos, and the one misconception to clear up first.",
                    lead, topic
                ),
                format!(
                    "Ground it with a quick story or a number, then bridge: once {} sees {} clearly, {} becomes the natural next question.",
                    audience, lead, second
                ),
            ],
            callout: None,
        },
        ScriptSection {
            title: "Segment 2".to_string(),
            paragraphs: vec![
                format!(
                    "Now unpack {}. Compare two or three approaches and be explicit about the trade-offs for {}.",
                    second, audience
                ),
                format!(
                    "Keep the {} but slow the pace slightly. This is the section viewers rewatch, so make every claim about {} concrete.",
                    tone, topic
                ),
            ],
            callout: None,
        },
        ScriptSection {
            title: "Segment 3".to_string(),
            paragraphs: vec![
                format!(
                    "Close the loop with {}. Turn everything so far into a sequence {} can follow this week.",
                    third, audience
                ),
                format!(
                    "Number the steps out loud. Lists hold attention late in a {} video and set up the call to action.",
                    topic
                ),
            ],
            callout: None,
        },
        ScriptSection {
            title: "Call To Action".to_string(),
            paragraphs: vec![
                format!("Recap the three beats in one breath: {}, {}, {}.", lead, second, third),
                format!(
                    "Invite {} to comment with the theme that matters most to them, and point at the next {} video on screen.",
                    audience, topic
                ),
            ],
            callout: Some("Hold the end screen for a full five seconds.".to_string()),
        },
    ]
}

/// Title ideas, a keyword-stuffed description and a capped tag union.
pub fn seo(topic: &str, themes: &[String], keywords: &[String]) -> SeoBlock {
    let headline_theme = themes
        .first()
        .map(|theme| capitalize_first(theme))
        .unwrap_or_else(|| "The Playbook".to_string());

    let title_ideas = vec![
        format!("The Truth About {}", capitalize_first(topic)),
        format!("{}: {}", capitalize_first(topic), headline_theme),
        format!("Why Everyone Is Getting {} Wrong", capitalize_first(topic)),
    ];

    // Union keeps insertion order: themes first, then raw keywords.
    let mut tags: Vec<String> = Vec::new();
    for term in themes.iter().chain(keywords.iter()) {
        if !tags.contains(term) {
            tags.push(term.clone());
        }
    }
    tags.truncate(12);

    let terms: Vec<&str> = tags.iter().take(5).map(String::as_str).collect();
    let description = if terms.is_empty() {
        format!("Everything you need to know about {}. Watch before your competition does.", topic)
    } else {
        format!(
            "Everything you need to know about {}: {}. Watch before your competition does.",
            topic,
            terms.join(", ")
        )
    };

    SeoBlock {
        title_ideas,
        description,
        tags,
    }
}

/// Exactly 3 next steps for the creator.
pub fn action_items(topic: &str, themes: &[String], insights: &[ScoredInsight]) -> Vec<String> {
    let reference = if insights.is_empty() {
        "Find three recent reference videos on the topic and note their pacing.".to_string()
    } else {
        let titles: Vec<String> = insights
            .iter()
            .take(3)
            .map(|insight| format!("\"{}\"", insight.video.title))
            .collect();
        format!("Watch the reference videos for pacing: {}.", titles.join(", "))
    };

    vec![
        format!(
            "Draft three hook variations for \"{}\" and test them as short-form teasers.",
            topic
        ),
        format!(
            "Storyboard the outline around {}, {} and {}.",
            theme_or(themes, 0, THEME_DEFAULTS[0]),
            theme_or(themes, 1, THEME_DEFAULTS[1]),
            theme_or(themes, 2, THEME_DEFAULTS[2]),
        ),
        reference,
    ]
}

/// Response assembly: runs every generator once and packages the result
/// with the insight list and the request echo. No computation of its own
/// beyond delegation.
pub fn build_document(
    request: &TopicRequest,
    keywords: &[String],
    themes: Vec<String>,
    insights: Vec<ScoredInsight>,
) -> StrategyDocument {
    let topic = request.topic.trim();
    let audience = request.audience.as_deref();
    let tone = request.style.as_deref();

    StrategyDocument {
        summary: summary(topic, &themes, &insights),
        hook_ideas: hook_ideas(topic, &themes, audience),
        narrative_angle: narrative_angle(topic, &themes, audience, tone),
        action_items: action_items(topic, &themes, &insights),
        seo: seo(topic, &themes, keywords),
        outline: outline(topic, &themes),
        script: script(topic, &themes, audience, tone),
        metadata: StrategyMetadata {
            topic: topic.to_string(),
            description: request.description.clone(),
            audience: request.audience.clone(),
            style: request.style.clone(),
            duration: request.duration.clone(),
            language: request.language.clone(),
        },
        themes,
        inspiration: insights,
    }
}
