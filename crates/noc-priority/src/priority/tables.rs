//! Keyword lists, title patterns and length tiers the rules read from.

use once_cell::sync::Lazy;
use regex::Regex;

/// Terms signalling a time-bound request. Matched as substrings of lowercased text.
pub(crate) const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediate",
    "deadline",
    "critical",
    "emergency",
    "time-sensitive",
    "expires",
    "due date",
    "last minute",
    "rush",
    "priority",
    "important",
    "essential",
    "mandatory",
    "required",
    "lease",
    "month",
    "week",
    "day",
    "selected",
    "competitive",
    "opportunity",
];

pub(crate) const LOW_PRIORITY_KEYWORDS: &[&str] = &[
    "flexible",
    "whenever",
    "no rush",
    "optional",
    "sometime",
    "when convenient",
    "not urgent",
    "low priority",
    "casual",
    "informal",
    "general inquiry",
    "just asking",
];

pub(crate) const HIGH_QUALITY_WORDS: &[&str] = &[
    "detailed",
    "comprehensive",
    "specific",
    "clear",
    "thorough",
    "complete",
    "professional",
    "formal",
    "structured",
    "organized",
    "well-written",
    "informative",
    "descriptive",
    "elaborate",
];

pub(crate) const LOW_QUALITY_WORDS: &[&str] = &[
    "brief",
    "short",
    "quick",
    "simple",
    "basic",
    "minimal",
    "vague",
    "unclear",
    "incomplete",
    "rough",
    "draft",
];

/// A title containing none of these earns the clean-formatting bonus.
pub(crate) const TITLE_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+=[]{};':\"\\|,.<>/?";

/// `(minimum length, points)`, checked top-down; the first satisfied tier wins.
pub(crate) type Tiers = &'static [(usize, i32)];

pub(crate) const TITLE_LENGTH_TIERS: Tiers = &[(20, 10), (10, 7), (5, 4)];
pub(crate) const DESCRIPTION_LENGTH_TIERS: Tiers = &[(200, 15), (100, 10), (50, 5), (20, 2)];
pub(crate) const DESCRIPTION_WORD_TIERS: Tiers = &[(30, 10), (15, 7), (8, 4), (4, 1)];

const TITLE_HIGH_QUALITY_SOURCES: &[&str] = &[
    r"^[A-Z][a-zA-Z\s]{10,}$",
    r"(?i)internship",
    r"(?i)research",
    r"(?i)collaboration",
    r"(?i)conference",
    r"(?i)workshop",
    r"(?i)project",
];

const TITLE_LOW_QUALITY_SOURCES: &[&str] = &[
    r"^[a-z]",
    r"^.{1,5}$",
    r"(?i)test",
    r"(?i)sample",
    r"(?i)draft",
    r"(?i)temp",
    r"(?i)temporary",
];

pub(crate) static TITLE_HIGH_QUALITY_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(TITLE_HIGH_QUALITY_SOURCES));

pub(crate) static TITLE_LOW_QUALITY_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(TITLE_LOW_QUALITY_SOURCES));

pub(crate) static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| Regex::new(source).expect("title pattern compiles"))
        .collect()
}

/// Points for the first tier whose threshold `value` reaches, or zero.
pub(crate) fn tier_points(value: usize, tiers: Tiers) -> i32 {
    tiers
        .iter()
        .find(|(minimum, _)| value >= *minimum)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub(crate) fn count_present(text: &str, terms: &[&str]) -> i32 {
    terms.iter().filter(|term| text.contains(*term)).count() as i32
}

pub(crate) fn count_matching(text: &str, patterns: &[Regex]) -> i32 {
    patterns
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .count() as i32
}
