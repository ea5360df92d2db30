use clap::Args;
use noc_priority::config::OutputFormat;
use noc_priority::error::AppError;
use noc_priority::priority::{ScoreBreakdown, ScoringInput};
use noc_priority::requests::{PriorityCount, RequestId, RequestImporter, TriageEntry, TriageReport};
use noc_priority::{PriorityAnalysis, PriorityLevel, PriorityScorer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RequestArgs {
    /// Request title
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Request description
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Purpose category (internship, study_abroad, research_collaboration, ...)
    #[arg(long, default_value = "other")]
    pub(crate) purpose: String,
}

impl RequestArgs {
    fn scoring_input(&self) -> ScoringInput {
        ScoringInput {
            title: self.title.clone(),
            description: self.description.clone(),
            purpose: self.purpose.as_str().into(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct TriageArgs {
    /// CSV export with id, title, description and purpose columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Show only the first N requests of the queue
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    priority: PriorityLevel,
    analysis: ScoreBreakdown,
}

#[derive(Debug, Serialize)]
struct TriageResponse<'a> {
    total_requests: usize,
    counts: &'a [PriorityCount],
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<String>,
    stale_requests: &'a [RequestId],
    entries: &'a [TriageEntry],
}

pub(crate) fn score<W: Write>(
    args: &RequestArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let input = args.scoring_input();
    let scorer = PriorityScorer::new();
    let response = ScoreResponse {
        priority: scorer.calculate_priority(&input),
        analysis: scorer.breakdown(&input),
    };

    match format {
        OutputFormat::Json => write_json(out, &response),
        OutputFormat::Text => {
            render_priority(out, response.priority, &input)?;
            render_breakdown(out, &response.analysis)?;
            Ok(())
        }
    }
}

pub(crate) fn analyze<W: Write>(
    args: &RequestArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let input = args.scoring_input();
    let analysis = PriorityScorer::new().analyze(&input);

    match format {
        OutputFormat::Json => write_json(out, &analysis),
        OutputFormat::Text => render_analysis(out, &analysis, &input),
    }
}

pub(crate) fn triage<W: Write>(
    args: &TriageArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let requests = RequestImporter::from_path(&args.csv)?;
    let report = TriageReport::build(&requests);
    let entries: &[TriageEntry] = match args.limit {
        Some(limit) => report.top(limit),
        None => &report.entries,
    };

    match format {
        OutputFormat::Json => write_json(
            out,
            &TriageResponse {
                total_requests: report.entries.len(),
                counts: &report.counts,
                alert: report.high_priority_alert(),
                stale_requests: &report.stale_requests,
                entries,
            },
        ),
        OutputFormat::Text => render_triage(out, &report, entries),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn render_priority<W: Write>(
    out: &mut W,
    priority: PriorityLevel,
    input: &ScoringInput,
) -> Result<(), AppError> {
    writeln!(out, "Priority: {} ({})", priority, priority.label())?;
    if !input.is_sufficient() {
        writeln!(out, "Title or description missing; default priority applied")?;
    }
    Ok(())
}

fn render_breakdown<W: Write>(out: &mut W, breakdown: &ScoreBreakdown) -> Result<(), AppError> {
    for component in breakdown.components() {
        writeln!(
            out,
            "- {}: {}/{}",
            component.factor.label(),
            component.score,
            component.ceiling
        )?;
    }
    writeln!(out, "Total: {}/100", breakdown.total_score)?;
    Ok(())
}

fn render_analysis<W: Write>(
    out: &mut W,
    analysis: &PriorityAnalysis,
    input: &ScoringInput,
) -> Result<(), AppError> {
    render_priority(out, analysis.priority, input)?;
    render_breakdown(out, &analysis.analysis)?;

    if analysis.recommendations.is_empty() {
        writeln!(out, "\nRecommendations: none")?;
    } else {
        writeln!(out, "\nRecommendations")?;
        for recommendation in &analysis.recommendations {
            writeln!(out, "- {}", recommendation.message())?;
        }
    }
    Ok(())
}

fn render_triage<W: Write>(
    out: &mut W,
    report: &TriageReport,
    entries: &[TriageEntry],
) -> Result<(), AppError> {
    writeln!(out, "Triage queue ({} requests)", report.entries.len())?;
    let counts: Vec<String> = report
        .counts
        .iter()
        .map(|count| format!("{}: {}", count.priority, count.count))
        .collect();
    writeln!(out, "{}", counts.join(", "))?;

    if let Some(alert) = report.high_priority_alert() {
        writeln!(out, "ALERT: {alert}")?;
    }

    if entries.is_empty() {
        writeln!(out, "\nNo requests to review")?;
        return Ok(());
    }

    writeln!(out)?;
    for (position, entry) in entries.iter().enumerate() {
        let department = entry
            .department
            .as_deref()
            .map(|department| format!(", {department}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{}. [{}] {} {} ({}{}, score {})",
            position + 1,
            entry.priority,
            entry.request_id,
            entry.title,
            entry.purpose,
            department,
            entry.total_score
        )?;
        if entry.stale {
            writeln!(
                out,
                "   stored priority {} differs from recomputed {}",
                entry.stored_priority, entry.priority
            )?;
        }
    }
    Ok(())
}
