//! Rule-based priority scoring for certificate requests.
//!
//! A request earns four independently clamped sub-scores (title 0-30,
//! description 0-40, urgency 0-20, purpose fit 0-10). Their sum maps onto
//! `low` / `medium` / `high` at the 40 and 70 marks. A request missing its
//! title or description is always classified `medium`.

mod domain;
mod policy;
mod rules;
mod tables;

#[cfg(test)]
mod tests;

pub use domain::{
    BreakdownError, PriorityLevel, Purpose, PurposeWeight, ScoreBreakdown, ScoreComponent,
    ScoreFactor, ScoringInput,
};
pub use policy::{classify, Recommendation, HIGH_PRIORITY_THRESHOLD, MEDIUM_PRIORITY_THRESHOLD};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stateless scorer. Every call reads only its input and the static rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScorer;

impl PriorityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Sub-scores for the input, treating missing text as empty.
    pub fn breakdown(&self, input: &ScoringInput) -> ScoreBreakdown {
        if !input.purpose.is_recognized() {
            warn!(purpose = %input.purpose, "unrecognized purpose scored as neutral");
        }
        rules::score_input(input)
    }

    pub fn calculate_priority(&self, input: &ScoringInput) -> PriorityLevel {
        if !input.is_sufficient() {
            debug!("title or description missing, using default priority");
            return PriorityLevel::default();
        }

        level_for(input, &self.breakdown(input))
    }

    /// Priority together with the breakdown behind it and, for low priorities,
    /// suggestions for improving the request.
    pub fn analyze(&self, input: &ScoringInput) -> PriorityAnalysis {
        let analysis = self.breakdown(input);
        let priority = level_for(input, &analysis);
        let recommendations = policy::recommendations(input, priority);

        PriorityAnalysis {
            priority,
            analysis,
            recommendations,
        }
    }
}

fn level_for(input: &ScoringInput, breakdown: &ScoreBreakdown) -> PriorityLevel {
    if !input.is_sufficient() {
        return PriorityLevel::default();
    }

    let priority = classify(breakdown.total_score);
    debug!(
        total = breakdown.total_score,
        priority = priority.as_str(),
        "calculated request priority"
    );
    priority
}

/// Diagnostic bundle rendered to reviewers; not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAnalysis {
    pub priority: PriorityLevel,
    pub analysis: ScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
}

pub fn calculate_priority(title: &str, description: &str, purpose: &str) -> PriorityLevel {
    PriorityScorer.calculate_priority(&ScoringInput::new(title, description, purpose))
}

pub fn priority_analysis(title: &str, description: &str, purpose: &str) -> PriorityAnalysis {
    PriorityScorer.analyze(&ScoringInput::new(title, description, purpose))
}
