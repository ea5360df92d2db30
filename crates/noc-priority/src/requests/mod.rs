//! Request records and the reviewer-facing operations built on the scorer.

pub mod domain;
mod import;
mod review;
mod triage;

pub use domain::{NocRequest, PriorityChange, RequestId, RequestUpdate};
pub use import::{ImportError, RequestImporter};
pub use review::PriorityReview;
pub use triage::{PriorityCount, TriageEntry, TriageReport};
