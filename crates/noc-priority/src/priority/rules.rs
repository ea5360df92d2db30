use super::domain::{Purpose, PurposeWeight, ScoreBreakdown, ScoreFactor, ScoringInput};
use super::tables::{
    count_matching, count_present, tier_points, DESCRIPTION_LENGTH_TIERS, DESCRIPTION_WORD_TIERS,
    HIGH_PRIORITY_KEYWORDS, HIGH_QUALITY_WORDS, LOW_PRIORITY_KEYWORDS, LOW_QUALITY_WORDS,
    TITLE_HIGH_QUALITY_PATTERNS, TITLE_LENGTH_TIERS, TITLE_LOW_QUALITY_PATTERNS,
    TITLE_SPECIAL_CHARACTERS, WHITESPACE_RUN,
};

const URGENCY_BASE: i32 = 10;
const QUALITY_BASE: i32 = 5;

pub(crate) fn score_input(input: &ScoringInput) -> ScoreBreakdown {
    let title = input.title();
    let description = input.description();

    ScoreBreakdown::new(
        title_score(title),
        description_score(description),
        urgency_score(title, description),
        quality_score(title, &input.purpose),
    )
}

pub(crate) fn title_score(title: &str) -> u8 {
    let mut score = tier_points(title.chars().count(), TITLE_LENGTH_TIERS);

    if title.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        score += 5;
    }
    if !title.chars().any(|c| TITLE_SPECIAL_CHARACTERS.contains(c)) {
        score += 3;
    }
    if title.split(' ').count() >= 3 {
        score += 2;
    }

    score += 2 * count_matching(title, &TITLE_HIGH_QUALITY_PATTERNS);
    score -= 3 * count_matching(title, &TITLE_LOW_QUALITY_PATTERNS);

    if count_present(&title.to_lowercase(), HIGH_PRIORITY_KEYWORDS) > 0 {
        score += 3;
    }

    clamp(score, ScoreFactor::Title)
}

pub(crate) fn description_score(description: &str) -> u8 {
    let lowered = description.to_lowercase();

    let mut score = tier_points(description.chars().count(), DESCRIPTION_LENGTH_TIERS);
    score += tier_points(word_count(description), DESCRIPTION_WORD_TIERS);

    score += count_present(&lowered, HIGH_QUALITY_WORDS);
    score -= count_present(&lowered, LOW_QUALITY_WORDS);

    if description.contains('.') {
        score += 1;
    }
    if description.contains(',') {
        score += 1;
    }
    if description.split('.').count() >= 3 {
        score += 2;
    }
    if description.contains('\n') || description.contains("  ") {
        score += 1;
    }

    clamp(score, ScoreFactor::Description)
}

pub(crate) fn urgency_score(title: &str, description: &str) -> u8 {
    let text = combined_text(title, description);

    let score = URGENCY_BASE + 2 * count_present(&text, HIGH_PRIORITY_KEYWORDS)
        - 3 * count_present(&text, LOW_PRIORITY_KEYWORDS);

    clamp(score, ScoreFactor::Urgency)
}

pub(crate) fn quality_score(title: &str, purpose: &Purpose) -> u8 {
    let mut score = QUALITY_BASE;

    match purpose.weight() {
        PurposeWeight::HighValue => score += 3,
        PurposeWeight::LowValue => score -= 2,
        PurposeWeight::Neutral => {}
    }

    if let Some(phrase) = purpose.title_phrase() {
        if title.to_lowercase().contains(&phrase) {
            score += 2;
        }
    }

    clamp(score, ScoreFactor::Quality)
}

pub(crate) fn has_urgency_indicator(title: &str, description: &str) -> bool {
    count_present(&combined_text(title, description), HIGH_PRIORITY_KEYWORDS) > 0
}

/// Whitespace-separated pieces, counting the empty edges leading or trailing
/// whitespace produce.
fn word_count(text: &str) -> usize {
    WHITESPACE_RUN.split(text).count()
}

fn combined_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

fn clamp(score: i32, factor: ScoreFactor) -> u8 {
    score.clamp(0, i32::from(factor.ceiling())) as u8
}
