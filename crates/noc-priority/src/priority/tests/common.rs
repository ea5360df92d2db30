use crate::priority::{PriorityScorer, ScoringInput};

pub(super) const URGENT_INTERNSHIP_TITLE: &str = "Urgent Internship Opportunity at Google";
pub(super) const URGENT_INTERNSHIP_DESCRIPTION: &str = "This is a time-sensitive internship opportunity with a strict application deadline. I have been selected for a competitive summer internship program and need urgent approval.";

pub(super) const STRUCTURED_DESCRIPTION: &str = "A detailed, comprehensive and professional plan.\nWeek one covers setup. Week two covers the study. Week three covers the report.";

pub(super) fn scorer() -> PriorityScorer {
    PriorityScorer::new()
}

pub(super) fn urgent_internship() -> ScoringInput {
    ScoringInput::new(
        URGENT_INTERNSHIP_TITLE,
        URGENT_INTERNSHIP_DESCRIPTION,
        "internship",
    )
}

pub(super) fn optional_workshop() -> ScoringInput {
    ScoringInput::new(
        "Workshop Registration",
        "I would like to attend a workshop sometime, it's optional and not urgent.",
        "workshop_participation",
    )
}

pub(super) fn research_collaboration() -> ScoringInput {
    ScoringInput::new(
        "Research Collaboration with MIT",
        "I have been invited to join a research collaboration with the MIT robotics lab. The work is structured around a detailed plan, with weekly milestones.",
        "research_collaboration",
    )
}
