use noc_priority::priority::{classify, PriorityScorer, ScoringInput};
use noc_priority::{PriorityLevel, Purpose};
use proptest::prelude::*;

fn purpose() -> impl Strategy<Value = Purpose> {
    prop_oneof![
        Just(Purpose::Internship),
        Just(Purpose::StudyAbroad),
        Just(Purpose::ResearchCollaboration),
        Just(Purpose::ExternalProject),
        Just(Purpose::ConferenceAttendance),
        Just(Purpose::WorkshopParticipation),
        Just(Purpose::Other),
        "[a-z_]{0,12}".prop_map(|raw| Purpose::parse(&raw)),
    ]
}

const SALT: &[&str] = &[
    "urgent",
    "deadline",
    "optional",
    "no rush",
    "detailed",
    "draft",
    "Internship",
    ".",
    ",",
    "\n",
    "!",
];

/// Free text salted with words the rules react to.
fn request_text() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        "[A-Za-z]{1,10}",
        prop::sample::select(SALT).prop_map(|word| word.to_string()),
    ];
    prop::collection::vec(words, 0..60).prop_map(|parts| parts.join(" "))
}

proptest! {
    /// Property: every sub-score stays inside its range and the total is their exact sum.
    #[test]
    fn breakdown_respects_bounds(
        title in request_text(),
        description in request_text(),
        purpose in purpose()
    ) {
        let breakdown = PriorityScorer::new().breakdown(&ScoringInput::new(title, description, purpose));

        prop_assert!(breakdown.title_score <= 30);
        prop_assert!(breakdown.description_score <= 40);
        prop_assert!(breakdown.urgency_score <= 20);
        prop_assert!(breakdown.quality_score <= 10);
        prop_assert_eq!(
            u16::from(breakdown.total_score),
            u16::from(breakdown.title_score)
                + u16::from(breakdown.description_score)
                + u16::from(breakdown.urgency_score)
                + u16::from(breakdown.quality_score)
        );
        prop_assert!(breakdown.total_score <= 100);
    }

    /// Property: scoring the same request twice gives the same answer.
    #[test]
    fn scoring_is_deterministic(
        title in request_text(),
        description in request_text(),
        purpose in purpose()
    ) {
        let input = ScoringInput::new(title, description, purpose);
        let scorer = PriorityScorer::new();

        prop_assert_eq!(scorer.analyze(&input), scorer.analyze(&input));
        prop_assert_eq!(scorer.calculate_priority(&input), scorer.calculate_priority(&input));
    }

    /// Property: advice is only ever attached to low priorities.
    #[test]
    fn recommendations_only_for_low_priority(
        title in request_text(),
        description in request_text(),
        purpose in purpose()
    ) {
        let analysis = PriorityScorer::new().analyze(&ScoringInput::new(title, description, purpose));

        if analysis.priority != PriorityLevel::Low {
            prop_assert!(analysis.recommendations.is_empty());
        }
    }

    /// Property: a scored request's level is exactly the step function of its total.
    #[test]
    fn level_matches_total_for_complete_input(
        title in "[A-Za-z]{1,20}",
        description in request_text(),
        purpose in purpose()
    ) {
        prop_assume!(!description.is_empty());
        let analysis = PriorityScorer::new().analyze(&ScoringInput::new(title, description, purpose));

        prop_assert_eq!(analysis.priority, classify(analysis.analysis.total_score));
        if analysis.analysis.total_score < 40 {
            prop_assert_eq!(analysis.priority, PriorityLevel::Low);
        }
    }

    /// Property: missing text always yields the medium fallback.
    #[test]
    fn missing_text_is_medium(text in request_text(), purpose in purpose()) {
        let scorer = PriorityScorer::new();
        prop_assert_eq!(
            scorer.calculate_priority(&ScoringInput::new("", text.clone(), purpose.clone())),
            PriorityLevel::Medium
        );
        prop_assert_eq!(
            scorer.calculate_priority(&ScoringInput::new(text, "", purpose)),
            PriorityLevel::Medium
        );
    }
}
