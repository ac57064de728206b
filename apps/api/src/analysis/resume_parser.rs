//! Resume Parser — extracts the resume signal set from pasted plain text.
//!
//! Skills are only read from header-introduced lines ("Skills: ...",
//! "Technologies ...", "Technical Skills: ..."). Unlike the JD extractor,
//! bare capitalized phrases are never treated as skills.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::signals::{
    dedup_preserving_order, detect_sections, extract_action_phrases, extract_keywords,
    extract_tools, split_skill_fragment, trimmed_matches, ResumeSignalSet, SignalSet, MAX_SKILLS,
};

static SKILL_LINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)skills?[:\s]*([^\n]+)",
        r"(?i)technologies?[:\s]*([^\n]+)",
        r"(?i)technical\s+skills?[:\s]*([^\n]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("skill line regex is valid"))
    .collect()
});

/// "5 years of experience", "10+ years experience".
static YEARS_OF_EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+\+?\s*years?\s+(?:of\s+)?experience")
        .expect("years of experience regex is valid")
});

/// An email address (TLD of two or more letters) or a 3-3-4 phone number.
/// Word boundaries are ASCII-only, so a contact glued to non-ASCII text
/// ("邮箱jane@example.com") still counts.
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?-u:\b)[a-z0-9_.%+-]+@[a-z0-9_.-]+\.[a-z]{2,}(?-u:\b)",
        r"|(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)",
    ))
    .expect("contact regex is valid")
});

const SKILL_SEPARATORS: &[char] = &[',', ';', '/', '|'];

/// Parses resume text into a `ResumeSignalSet`. Empty input yields an empty set.
pub fn parse_resume_text(text: &str) -> ResumeSignalSet {
    let mut skills = Vec::new();

    for line in text.split('\n').map(str::trim) {
        for pattern in SKILL_LINE_PATTERNS.iter() {
            if let Some(remainder) = pattern.captures(line).and_then(|c| c.get(1)) {
                skills.extend(split_skill_fragment(remainder.as_str(), SKILL_SEPARATORS));
            }
        }
    }

    let mut skills = dedup_preserving_order(skills);
    skills.truncate(MAX_SKILLS);

    let mut experience_keywords = trimmed_matches(&YEARS_OF_EXPERIENCE_RE, text);
    experience_keywords.extend(extract_action_phrases(text));

    let resume = ResumeSignalSet {
        signals: SignalSet {
            skills,
            tools: extract_tools(text),
            experience_keywords: dedup_preserving_order(experience_keywords),
            keywords: extract_keywords(text),
        },
        sections: detect_sections(text),
        has_contact_info: CONTACT_RE.is_match(text),
    };

    debug!(
        skills = resume.signals.skills.len(),
        tools = resume.signals.tools.len(),
        sections = resume.sections.len(),
        has_contact_info = resume.has_contact_info,
        "Parsed resume signals"
    );

    resume
}
