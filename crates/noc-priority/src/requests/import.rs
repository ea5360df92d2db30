use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::priority::{PriorityLevel, PriorityScorer, Purpose};

use super::domain::{NocRequest, RequestId};

/// Failure while reading a request export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read request export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: request id is missing")]
    MissingId { line: usize },
    #[error("line {line}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { line: usize, value: String },
}

/// Loads certificate requests from a CSV export.
///
/// Expected headers: `id`, `title`, `description`, `purpose`, and optionally
/// `department`, `submitted_on` and `priority`. Rows without a stored priority
/// are classified on import.
pub struct RequestImporter;

impl RequestImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NocRequest>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NocRequest>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut requests = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            // Quoted fields may span lines, so report where the record starts.
            let line = record
                .position()
                .map_or(0, |position| position.line() as usize);
            let row: RequestRow = record.deserialize(Some(&headers))?;
            requests.push(row.into_request(line)?);
        }

        info!(count = requests.len(), "imported certificate requests");
        Ok(requests)
    }
}

#[derive(Debug, Deserialize)]
struct RequestRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    purpose: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    department: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    submitted_on: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    priority: Option<String>,
}

impl RequestRow {
    fn into_request(self, line: usize) -> Result<NocRequest, ImportError> {
        let id = self.id.ok_or(ImportError::MissingId { line })?;
        let submitted_on = self
            .submitted_on
            .map(|value| parse_date(&value).ok_or(ImportError::InvalidDate { line, value }))
            .transpose()?;

        let mut request = NocRequest {
            id: RequestId(id),
            title: self.title,
            description: self.description,
            purpose: Purpose::parse(&self.purpose),
            department: self.department,
            submitted_on,
            priority: PriorityLevel::default(),
        };
        request.priority = match self.priority {
            Some(stored) => PriorityLevel::parse_or_default(&stored),
            None => PriorityScorer.calculate_priority(&request.scoring_input()),
        };

        Ok(request)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
