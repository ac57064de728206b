//! JD Extractor — pulls skills, tools, experience phrases and generic keywords
//! out of a raw job description using pattern heuristics. Never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::signals::{
    dedup_preserving_order, extract_action_phrases, extract_keywords, extract_tools,
    split_skill_fragment, trimmed_matches, SignalSet, MAX_SKILLS,
};

/// "Skills: ...", "Requirements ..." and friends, through end of line.
static HEADER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:skills?|technologies?|requirements|qualifications)[:\s]*[^\n]+")
        .expect("header line regex is valid")
});

/// "proficient in ...", "experience with ...", "knowledge of ...".
static PHRASE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:proficient in|experience with|knowledge of)\s+[^\n]+")
        .expect("phrase line regex is valid")
});

/// Capitalized words, optionally several in a row, followed by a comma,
/// newline or "and". Case-sensitive on purpose.
static CAPITALIZED_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s*(?:,|\n|and)")
        .expect("capitalized phrase regex is valid")
});

static HEADER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:skills?|technologies?|requirements|qualifications)[:\s]*")
        .expect("header prefix regex is valid")
});

static PHRASE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:proficient in|experience with|knowledge of)\s+")
        .expect("phrase prefix regex is valid")
});

/// Any duration mention, e.g. "5 years" or "10+ years".
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+\+?\s*years?").expect("duration regex is valid")
});

const SKILL_SEPARATORS: &[char] = &[',', ';', '/'];

/// Extracts the JD signal set. Empty input yields an empty set.
pub fn extract_jd_signals(text: &str) -> SignalSet {
    let mut skills = Vec::new();

    for line in text.split('\n').map(str::trim) {
        for m in HEADER_LINE_RE.find_iter(line) {
            skills.extend(split_skill_fragment(
                &strip_intro(m.as_str()),
                SKILL_SEPARATORS,
            ));
        }
        for m in PHRASE_LINE_RE.find_iter(line) {
            skills.extend(split_skill_fragment(
                &strip_intro(m.as_str()),
                SKILL_SEPARATORS,
            ));
        }
        for m in CAPITALIZED_PHRASE_RE.find_iter(line) {
            skills.extend(split_skill_fragment(m.as_str(), SKILL_SEPARATORS));
        }
    }

    let mut skills = dedup_preserving_order(skills);
    skills.truncate(MAX_SKILLS);

    let mut experience_keywords = trimmed_matches(&DURATION_RE, text);
    experience_keywords.extend(extract_action_phrases(text));
    let experience_keywords = dedup_preserving_order(experience_keywords);

    let signals = SignalSet {
        skills,
        tools: extract_tools(text),
        experience_keywords,
        keywords: extract_keywords(text),
    };

    debug!(
        skills = signals.skills.len(),
        tools = signals.tools.len(),
        experience = signals.experience_keywords.len(),
        keywords = signals.keywords.len(),
        "Extracted JD signals"
    );

    signals
}

/// Removes every header word and introductory phrase from a matched line.
fn strip_intro(matched: &str) -> String {
    let without_header = HEADER_PREFIX_RE.replace_all(matched, "");
    PHRASE_PREFIX_RE.replace_all(&without_header, "").into_owned()
}
