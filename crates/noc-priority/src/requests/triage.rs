use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::priority::{PriorityLevel, Purpose, Recommendation};

use super::domain::{NocRequest, RequestId};
use super::review::PriorityReview;

/// One request's position in the review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageEntry {
    pub request_id: RequestId,
    pub title: String,
    pub purpose: Purpose,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<NaiveDate>,
    pub stored_priority: PriorityLevel,
    pub priority: PriorityLevel,
    pub total_score: u8,
    pub stale: bool,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: PriorityLevel,
    pub count: usize,
}

/// Requests ranked for review: recomputed priority first, then total score,
/// then oldest submission, then input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    pub entries: Vec<TriageEntry>,
    pub counts: Vec<PriorityCount>,
    pub stale_requests: Vec<RequestId>,
}

impl TriageReport {
    pub fn build(requests: &[NocRequest]) -> Self {
        let mut entries: Vec<TriageEntry> = requests
            .iter()
            .map(|request| entry_for(request, request.review()))
            .collect();

        entries.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.total_score.cmp(&a.total_score))
                .then_with(|| oldest_first(a.submitted_on, b.submitted_on))
        });

        let counts = PriorityLevel::ordered()
            .into_iter()
            .map(|priority| PriorityCount {
                priority,
                count: entries
                    .iter()
                    .filter(|entry| entry.priority == priority)
                    .count(),
            })
            .collect();

        let stale_requests = entries
            .iter()
            .filter(|entry| entry.stale)
            .map(|entry| entry.request_id.clone())
            .collect();

        Self {
            entries,
            counts,
            stale_requests,
        }
    }

    pub fn count_for(&self, priority: PriorityLevel) -> usize {
        self.counts
            .iter()
            .find(|count| count.priority == priority)
            .map(|count| count.count)
            .unwrap_or(0)
    }

    pub fn top(&self, limit: usize) -> &[TriageEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn high_priority_alert(&self) -> Option<String> {
        match self.count_for(PriorityLevel::High) {
            0 => None,
            count => Some(format!(
                "{count} high-priority requests detected requiring immediate attention"
            )),
        }
    }
}

fn entry_for(request: &NocRequest, review: PriorityReview) -> TriageEntry {
    let stale = review.is_stale();
    TriageEntry {
        request_id: review.request_id,
        title: request.title.clone(),
        purpose: request.purpose.clone(),
        department: request.department.clone(),
        submitted_on: request.submitted_on,
        stored_priority: review.current_priority,
        priority: review.analysis.priority,
        total_score: review.analysis.analysis.total_score,
        stale,
        recommendations: review.analysis.recommendations,
    }
}

fn oldest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
