use pretty_assertions::assert_eq;

use super::common::*;
use crate::priority::{
    BreakdownError, PriorityAnalysis, PriorityLevel, Recommendation, ScoreBreakdown, ScoreFactor,
    ScoringInput,
};

#[test]
fn urgent_internship_breakdown_is_fully_itemized() {
    let analysis = scorer().analyze(&urgent_internship());

    assert_eq!(analysis.priority, PriorityLevel::High);
    assert_eq!(
        analysis.analysis,
        ScoreBreakdown {
            title_score: 27,
            description_score: 20,
            urgency_score: 20,
            quality_score: 10,
            total_score: 77,
        }
    );
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn optional_keywords_hold_workshop_below_medium() {
    let analysis = scorer().analyze(&optional_workshop());

    assert_eq!(analysis.analysis.urgency_score, 3);
    assert_eq!(analysis.analysis.total_score, 39);
    assert_eq!(analysis.priority, PriorityLevel::Low);
    assert_eq!(analysis.recommendations, vec![Recommendation::MoreDetail]);
}

#[test]
fn research_collaboration_clears_high_threshold() {
    let analysis = scorer().analyze(&research_collaboration());
    assert_eq!(analysis.analysis.total_score, 71);
    assert_eq!(analysis.priority, PriorityLevel::High);
}

#[test]
fn tiny_request_gets_every_recommendation_in_order() {
    let analysis = scorer().analyze(&ScoringInput::new("a", "b", "other"));

    assert_eq!(analysis.priority, PriorityLevel::Low);
    assert_eq!(
        analysis.recommendations,
        vec![
            Recommendation::DescriptiveTitle,
            Recommendation::MoreDetail,
            Recommendation::UrgencyIndicators,
        ]
    );
}

#[test]
fn missing_text_analysis_reports_fallback_without_advice() {
    let input = ScoringInput {
        title: None,
        description: Some("some description text".to_string()),
        purpose: "other".into(),
    };

    let analysis = scorer().analyze(&input);

    assert_eq!(analysis.priority, PriorityLevel::Medium);
    assert!(analysis.recommendations.is_empty());
    assert_eq!(
        analysis.analysis.total_score,
        analysis
            .analysis
            .components()
            .iter()
            .map(|component| component.score)
            .sum::<u8>()
    );
}

#[test]
fn components_follow_factor_order_with_ceilings() {
    let breakdown = scorer().breakdown(&urgent_internship());
    let components = breakdown.components();

    let factors: Vec<ScoreFactor> = components.iter().map(|c| c.factor).collect();
    assert_eq!(factors, ScoreFactor::ordered().to_vec());
    let ceilings: Vec<u8> = components.iter().map(|c| c.ceiling).collect();
    assert_eq!(ceilings, vec![30, 40, 20, 10]);
}

#[test]
fn analysis_serializes_with_camel_case_scores() {
    let analysis = scorer().analyze(&ScoringInput::new("a", "b", "other"));
    let json = serde_json::to_value(&analysis).expect("serializes");

    assert_eq!(json["priority"], "low");
    assert_eq!(json["analysis"]["titleScore"], 0);
    assert_eq!(json["analysis"]["totalScore"], 13);
    assert_eq!(
        json["recommendations"][0],
        "Consider making the title more descriptive"
    );
}

#[test]
fn breakdown_reads_back_from_its_json() {
    let breakdown = scorer().breakdown(&urgent_internship());
    let json = serde_json::to_string(&breakdown).expect("serializes");

    let restored: ScoreBreakdown = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, breakdown);
}

#[test]
fn breakdown_rejects_scores_above_their_ceiling() {
    let json = r#"{"titleScore":200,"descriptionScore":0,"urgencyScore":0,"qualityScore":0,"totalScore":7}"#;

    let err = serde_json::from_str::<ScoreBreakdown>(json).expect_err("title over ceiling");
    assert!(err.to_string().contains("Title quality score 200 exceeds its ceiling of 30"));
}

#[test]
fn breakdown_rejects_total_that_is_not_the_sum() {
    let json = r#"{"titleScore":10,"descriptionScore":10,"urgencyScore":10,"qualityScore":5,"totalScore":7}"#;

    let err = serde_json::from_str::<ScoreBreakdown>(json).expect_err("inconsistent total");
    let expected = BreakdownError::TotalMismatch {
        stated: 7,
        expected: 35,
    };
    assert!(err.to_string().contains(&expected.to_string()));
}

#[test]
fn analysis_payload_inherits_breakdown_checks() {
    let json = r#"{"priority":"high","analysis":{"titleScore":30,"descriptionScore":40,"urgencyScore":20,"qualityScore":10,"totalScore":99},"recommendations":[]}"#;

    assert!(serde_json::from_str::<PriorityAnalysis>(json).is_err());
}
