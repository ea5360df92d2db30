use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::priority::{PriorityLevel, PriorityScorer, Purpose, ScoringInput};

use super::review::PriorityReview;

/// Identifier wrapper for certificate requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The scoring-relevant slice of a certificate request plus its stored priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NocRequest {
    pub id: RequestId,
    pub title: String,
    pub description: String,
    pub purpose: Purpose,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub submitted_on: Option<NaiveDate>,
    #[serde(default)]
    pub priority: PriorityLevel,
}

impl NocRequest {
    /// Build a new request, classifying it the way intake does.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        purpose: impl Into<Purpose>,
    ) -> Self {
        let mut request = Self {
            id: RequestId(id.into()),
            title: title.into(),
            description: description.into(),
            purpose: purpose.into(),
            department: None,
            submitted_on: None,
            priority: PriorityLevel::default(),
        };
        request.priority = PriorityScorer.calculate_priority(&request.scoring_input());
        request
    }

    pub fn scoring_input(&self) -> ScoringInput {
        ScoringInput {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            purpose: self.purpose.clone(),
        }
    }

    /// Merge the edit and, when it touched a scored field, recompute the priority.
    ///
    /// Returns the transition when the stored level actually changed.
    pub fn apply_update(&mut self, update: RequestUpdate) -> Option<PriorityChange> {
        let RequestUpdate {
            title,
            description,
            purpose,
        } = update.normalized();

        if title.is_none() && description.is_none() && purpose.is_none() {
            return None;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(purpose) = purpose {
            self.purpose = purpose;
        }

        let previous = self.priority;
        self.priority = PriorityScorer.calculate_priority(&self.scoring_input());

        if previous == self.priority {
            return None;
        }

        info!(
            request_id = %self.id,
            from = previous.as_str(),
            to = self.priority.as_str(),
            "request priority recalculated"
        );
        Some(PriorityChange {
            from: previous,
            to: self.priority,
        })
    }

    /// Compare the stored priority with a fresh analysis of the current text.
    pub fn review(&self) -> PriorityReview {
        PriorityReview::new(self)
    }
}

/// Partial edit to a request. Empty strings count as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub purpose: Option<Purpose>,
}

impl RequestUpdate {
    fn normalized(self) -> Self {
        Self {
            title: self.title.filter(|value| !value.is_empty()),
            description: self.description.filter(|value| !value.is_empty()),
            purpose: self.purpose.filter(|value| !value.as_str().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityChange {
    pub from: PriorityLevel,
    pub to: PriorityLevel,
}

impl PriorityChange {
    pub fn is_escalation(&self) -> bool {
        self.to > self.from
    }
}
