use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the certificate is being requested.
///
/// Parsing is total: values outside the known categories are kept verbatim as
/// [`Purpose::Unrecognized`] and score as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Purpose {
    Internship,
    StudyAbroad,
    ResearchCollaboration,
    ExternalProject,
    ConferenceAttendance,
    WorkshopParticipation,
    Other,
    Unrecognized(String),
}

/// How a purpose category shifts the overall-quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeWeight {
    HighValue,
    Neutral,
    LowValue,
}

impl Purpose {
    pub fn recognized() -> [Self; 7] {
        [
            Self::Internship,
            Self::StudyAbroad,
            Self::ResearchCollaboration,
            Self::ExternalProject,
            Self::ConferenceAttendance,
            Self::WorkshopParticipation,
            Self::Other,
        ]
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "internship" => Self::Internship,
            "study_abroad" => Self::StudyAbroad,
            "research_collaboration" => Self::ResearchCollaboration,
            "external_project" => Self::ExternalProject,
            "conference_attendance" => Self::ConferenceAttendance,
            "workshop_participation" => Self::WorkshopParticipation,
            "other" => Self::Other,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Internship => "internship",
            Self::StudyAbroad => "study_abroad",
            Self::ResearchCollaboration => "research_collaboration",
            Self::ExternalProject => "external_project",
            Self::ConferenceAttendance => "conference_attendance",
            Self::WorkshopParticipation => "workshop_participation",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    pub fn weight(&self) -> PurposeWeight {
        match self {
            Self::ResearchCollaboration | Self::ConferenceAttendance | Self::Internship => {
                PurposeWeight::HighValue
            }
            Self::WorkshopParticipation | Self::Other => PurposeWeight::LowValue,
            Self::StudyAbroad | Self::ExternalProject | Self::Unrecognized(_) => {
                PurposeWeight::Neutral
            }
        }
    }

    /// Phrase a well-aligned title is expected to contain, e.g. "research collaboration".
    pub fn title_phrase(&self) -> Option<String> {
        if self.is_recognized() {
            Some(self.as_str().replace('_', " "))
        } else {
            None
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Purpose {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Purpose {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Purpose> for String {
    fn from(value: Purpose) -> Self {
        match value {
            Purpose::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Coarse triage classification persisted on a request record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl PriorityLevel {
    /// Most urgent first, the order reviewers work through a queue.
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
        }
    }

    /// Stored values that are not a known level read back as `medium`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a request the scorer reads. Absent and empty text are equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub purpose: Purpose,
}

impl ScoringInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        purpose: impl Into<Purpose>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            purpose: purpose.into(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Both title and description carry text; otherwise the `medium` fallback applies.
    pub fn is_sufficient(&self) -> bool {
        !self.title().is_empty() && !self.description().is_empty()
    }
}

/// Sub-scores that make up a priority decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFactor {
    Title,
    Description,
    Urgency,
    Quality,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 4] {
        [Self::Title, Self::Description, Self::Urgency, Self::Quality]
    }

    pub const fn ceiling(self) -> u8 {
        match self {
            Self::Title => 30,
            Self::Description => 40,
            Self::Urgency => 20,
            Self::Quality => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title quality",
            Self::Description => "Description quality",
            Self::Urgency => "Urgency keywords",
            Self::Quality => "Purpose fit",
        }
    }
}

/// Decomposed score. `total_score` is always the exact sum of the four parts.
///
/// Deserialization re-checks that invariant and every factor ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawScoreBreakdown")]
pub struct ScoreBreakdown {
    pub title_score: u8,
    pub description_score: u8,
    pub urgency_score: u8,
    pub quality_score: u8,
    pub total_score: u8,
}

impl ScoreBreakdown {
    pub(crate) fn new(
        title_score: u8,
        description_score: u8,
        urgency_score: u8,
        quality_score: u8,
    ) -> Self {
        Self {
            title_score,
            description_score,
            urgency_score,
            quality_score,
            total_score: title_score + description_score + urgency_score + quality_score,
        }
    }

    pub fn score_for(&self, factor: ScoreFactor) -> u8 {
        match factor {
            ScoreFactor::Title => self.title_score,
            ScoreFactor::Description => self.description_score,
            ScoreFactor::Urgency => self.urgency_score,
            ScoreFactor::Quality => self.quality_score,
        }
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        ScoreFactor::ordered()
            .into_iter()
            .map(|factor| ScoreComponent {
                factor,
                score: self.score_for(factor),
                ceiling: factor.ceiling(),
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BreakdownError {
    #[error("{} score {} exceeds its ceiling of {}", .factor.label(), .score, .factor.ceiling())]
    AboveCeiling { factor: ScoreFactor, score: u8 },
    #[error("total score {stated} does not match the sum of its parts ({expected})")]
    TotalMismatch { stated: u8, expected: u8 },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScoreBreakdown {
    title_score: u8,
    description_score: u8,
    urgency_score: u8,
    quality_score: u8,
    total_score: u8,
}

impl TryFrom<RawScoreBreakdown> for ScoreBreakdown {
    type Error = BreakdownError;

    fn try_from(raw: RawScoreBreakdown) -> Result<Self, Self::Error> {
        let parts = [
            (ScoreFactor::Title, raw.title_score),
            (ScoreFactor::Description, raw.description_score),
            (ScoreFactor::Urgency, raw.urgency_score),
            (ScoreFactor::Quality, raw.quality_score),
        ];
        if let Some((factor, score)) = parts
            .into_iter()
            .find(|(factor, score)| *score > factor.ceiling())
        {
            return Err(BreakdownError::AboveCeiling { factor, score });
        }

        let breakdown = Self::new(
            raw.title_score,
            raw.description_score,
            raw.urgency_score,
            raw.quality_score,
        );
        if breakdown.total_score != raw.total_score {
            return Err(BreakdownError::TotalMismatch {
                stated: raw.total_score,
                expected: breakdown.total_score,
            });
        }
        Ok(breakdown)
    }
}

/// One sub-score next to the most it could have contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: u8,
    pub ceiling: u8,
}
