use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::priority::{PriorityAnalysis, PriorityLevel, PriorityScorer};

use super::domain::{NocRequest, RequestId};

/// Stored priority next to the analysis of the request's current text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityReview {
    pub request_id: RequestId,
    pub current_priority: PriorityLevel,
    pub analysis: PriorityAnalysis,
}

impl PriorityReview {
    pub(crate) fn new(request: &NocRequest) -> Self {
        let analysis = PriorityScorer.analyze(&request.scoring_input());
        let review = Self {
            request_id: request.id.clone(),
            current_priority: request.priority,
            analysis,
        };

        if review.is_stale() {
            warn!(
                request_id = %review.request_id,
                stored = review.current_priority.as_str(),
                recomputed = review.recomputed_priority().as_str(),
                "stored priority no longer matches request text"
            );
        }

        review
    }

    pub fn recomputed_priority(&self) -> PriorityLevel {
        self.analysis.priority
    }

    /// The stored level disagrees with what the current text scores.
    pub fn is_stale(&self) -> bool {
        self.current_priority != self.analysis.priority
    }
}
