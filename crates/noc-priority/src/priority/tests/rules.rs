use super::common::*;
use crate::priority::rules::{description_score, quality_score, title_score, urgency_score};
use crate::priority::Purpose;

#[test]
fn title_rewards_length_capitalization_and_topic_patterns() {
    assert_eq!(title_score("Research Collaboration Project"), 28);
    assert_eq!(title_score(URGENT_INTERNSHIP_TITLE), 27);
}

#[test]
fn title_penalties_accumulate_per_matching_pattern() {
    // "temp" and "temporary" both match.
    assert_eq!(title_score("Temporary"), 6);
    assert_eq!(title_score("lowercase internship request"), 14);
    assert_eq!(title_score("test"), 0);
}

#[test]
fn title_loses_clean_formatting_bonus_on_punctuation() {
    assert_eq!(title_score("Trip to Delhi!"), 14);
}

#[test]
fn title_length_counts_characters_not_bytes() {
    // Ten two-byte characters: the 10-character tier, not the 20-byte one.
    assert_eq!(title_score("éééééééééé"), 10);
    assert_eq!(title_score("ééééééééé"), 7);
}

#[test]
fn whitespace_title_is_scored_not_skipped() {
    assert_eq!(title_score("   "), 2);
}

#[test]
fn description_rewards_length_vocabulary_and_structure() {
    assert_eq!(description_score(STRUCTURED_DESCRIPTION), 25);
    assert_eq!(description_score(URGENT_INTERNSHIP_DESCRIPTION), 20);
}

#[test]
fn description_floor_is_zero() {
    assert_eq!(description_score("brief vague rough draft"), 0);
    assert_eq!(description_score("ok"), 0);
}

#[test]
fn urgency_caps_at_ceiling_and_floor() {
    assert_eq!(
        urgency_score(
            "Urgent deadline",
            "critical emergency asap immediate priority important essential mandatory"
        ),
        20
    );
    assert_eq!(
        urgency_score("flexible", "whenever no rush optional casual"),
        0
    );
}

#[test]
fn urgency_starts_from_neutral_base() {
    assert_eq!(urgency_score("a", "b"), 10);
}

#[test]
fn quality_combines_purpose_weight_and_title_consistency() {
    assert_eq!(
        quality_score(
            "Research collaboration at MIT",
            &Purpose::ResearchCollaboration
        ),
        10
    );
    assert_eq!(quality_score("Workshop", &Purpose::WorkshopParticipation), 3);
    assert_eq!(quality_score("Going to study abroad", &Purpose::StudyAbroad), 7);
}

#[test]
fn unrecognized_purpose_is_neutral_and_never_consistent() {
    let purpose = Purpose::parse("hackathon");
    assert!(!purpose.is_recognized());
    assert_eq!(quality_score("Hackathon in Pune", &purpose), 5);
    assert_eq!(quality_score("Anything", &Purpose::parse("")), 5);
}
