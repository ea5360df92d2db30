use serde::{Deserialize, Serialize};

use super::domain::{PriorityLevel, ScoringInput};
use super::rules::has_urgency_indicator;

pub const HIGH_PRIORITY_THRESHOLD: u8 = 70;
pub const MEDIUM_PRIORITY_THRESHOLD: u8 = 40;

const DESCRIPTIVE_TITLE_LENGTH: usize = 10;
const DETAILED_DESCRIPTION_LENGTH: usize = 100;

/// Step function from total score to level.
pub fn classify(total_score: u8) -> PriorityLevel {
    if total_score >= HIGH_PRIORITY_THRESHOLD {
        PriorityLevel::High
    } else if total_score >= MEDIUM_PRIORITY_THRESHOLD {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}

/// Advice shown to the requester when a request lands in the low tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Consider making the title more descriptive")]
    DescriptiveTitle,
    #[serde(rename = "Add more details to the description")]
    MoreDetail,
    #[serde(rename = "Consider adding urgency indicators if applicable")]
    UrgencyIndicators,
}

impl Recommendation {
    pub const fn message(self) -> &'static str {
        match self {
            Self::DescriptiveTitle => "Consider making the title more descriptive",
            Self::MoreDetail => "Add more details to the description",
            Self::UrgencyIndicators => "Consider adding urgency indicators if applicable",
        }
    }
}

pub(crate) fn recommendations(input: &ScoringInput, priority: PriorityLevel) -> Vec<Recommendation> {
    if priority != PriorityLevel::Low {
        return Vec::new();
    }

    let title = input.title();
    let description = input.description();
    let mut advice = Vec::new();

    if title.chars().count() < DESCRIPTIVE_TITLE_LENGTH {
        advice.push(Recommendation::DescriptiveTitle);
    }
    if description.chars().count() < DETAILED_DESCRIPTION_LENGTH {
        advice.push(Recommendation::MoreDetail);
    }
    if !has_urgency_indicator(title, description) {
        advice.push(Recommendation::UrgencyIndicators);
    }

    advice
}
