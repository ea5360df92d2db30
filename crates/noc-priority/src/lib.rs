//! Priority scoring for No Objection Certificate requests.
//!
//! [`priority`] holds the scoring engine: four bounded sub-scores derived from a
//! request's title, description and purpose, folded into a `low`/`medium`/`high`
//! classification. [`requests`] layers the record-level helpers reviewers use on
//! top of it: rescoring on edit, stored-versus-recomputed review, CSV import and
//! triage ranking.

pub mod config;
pub mod error;
pub mod priority;
pub mod requests;
pub mod telemetry;

pub use priority::{
    calculate_priority, priority_analysis, PriorityAnalysis, PriorityLevel, PriorityScorer,
    Purpose, Recommendation, ScoreBreakdown, ScoringInput,
};
