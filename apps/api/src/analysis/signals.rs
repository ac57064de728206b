//! Signal sets — the structured output of the JD extractor and the resume parser.
//!
//! Both extractors share the tool vocabulary, the generic keyword pass and the
//! order-preserving dedup defined here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed technology vocabulary. A tool is reported iff its name occurs
/// case-insensitively anywhere in the text.
pub const TECH_KEYWORDS: &[&str] = &[
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "Git",
    "Jira",
    "Slack",
];

/// Standard resume section names, matched as case-insensitive substrings.
pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "summary",
];

pub const MAX_SKILLS: usize = 10;
pub const MAX_KEYWORDS: usize = 20;

/// Skill tokens must be strictly longer than this many UTF-16 code units...
const MIN_SKILL_UNITS: usize = 2;
/// ...and strictly shorter than this many.
const MAX_SKILL_UNITS: usize = 30;

/// Generic keywords must be strictly longer than this many characters.
const MIN_KEYWORD_CHARS: usize = 4;

/// Action verb followed by the rest of its line.
static ACTION_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:managed|led|developed|implemented|created|achieved|built|designed)\s+[^\n]+",
    )
    .expect("action phrase regex is valid")
});

/// Signals common to job descriptions and resumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub experience_keywords: Vec<String>,
    pub keywords: Vec<String>,
}

/// Resume signals: the common set plus structural signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSignalSet {
    #[serde(flatten)]
    pub signals: SignalSet,
    pub sections: Vec<String>,
    pub has_contact_info: bool,
}

/// Deduplicates by exact string equality, keeping the first occurrence.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Splits a captured fragment into skill candidates on the given separators,
/// keeping trimmed tokens whose length lies strictly between the bounds.
/// Length is counted in UTF-16 code units, so an emoji counts as two.
pub fn split_skill_fragment(fragment: &str, separators: &[char]) -> Vec<String> {
    fragment
        .split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|s| {
            let len = s.encode_utf16().count();
            len > MIN_SKILL_UNITS && len < MAX_SKILL_UNITS
        })
        .map(String::from)
        .collect()
}

/// Vocabulary tools mentioned anywhere in the text, in vocabulary order.
pub fn extract_tools(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|tech| text_lower.contains(&tech.to_lowercase()))
        .map(|tech| tech.to_string())
        .collect()
}

/// Generic keywords: lowercase, punctuation to spaces, tokens longer than
/// four characters, first 20 in order of appearance, then deduplicated.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    dedup_preserving_order(
        normalized
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
            .take(MAX_KEYWORDS)
            .map(String::from),
    )
}

/// Every match of `re` in `text`, trimmed, in match order.
pub fn trimmed_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Action-verb phrases such as "Led a team of five", each running to the end
/// of its line. Verbs are not word-anchored, so "skilled in" yields "led in".
pub fn extract_action_phrases(text: &str) -> Vec<String> {
    trimmed_matches(&ACTION_PHRASE_RE, text)
}

/// Standard section names present anywhere in the text.
pub fn detect_sections(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SECTION_HEADERS
        .iter()
        .filter(|header| text_lower.contains(*header))
        .map(|header| header.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let items = vec!["Rust", "Go", "Rust", "rust", "Go"]
            .into_iter()
            .map(String::from);
        assert_eq!(dedup_preserving_order(items), vec!["Rust", "Go", "rust"]);
    }

    #[test]
    fn test_split_skill_fragment_applies_exclusive_bounds() {
        let skills = split_skill_fragment("Go, SQL ; C/Kubernetes", &[',', ';', '/']);
        // "Go" and "C" are too short, "SQL" is exactly 3
        assert_eq!(skills, vec!["SQL", "Kubernetes"]);

        let long = "a".repeat(30);
        let almost = "b".repeat(29);
        let skills = split_skill_fragment(&format!("{long}, {almost}"), &[',']);
        assert_eq!(skills, vec![almost]);
    }

    #[test]
    fn test_split_skill_fragment_counts_utf16_units() {
        // Each rocket is two code units: two of them clear the lower bound,
        // fifteen of them reach the upper one.
        let pair = "🚀".repeat(2);
        let fifteen = "🚀".repeat(15);
        let skills = split_skill_fragment(&format!("🚀, {pair}, Café, {fifteen}"), &[',']);
        assert_eq!(skills, vec![pair, "Café".to_string()]);
    }

    #[test]
    fn test_split_skill_fragment_pipe_only_when_requested() {
        assert_eq!(
            split_skill_fragment("Rust | Python", &[',']),
            vec!["Rust | Python"]
        );
        assert_eq!(
            split_skill_fragment("Rust | Python", &[',', '|']),
            vec!["Rust", "Python"]
        );
    }

    #[test]
    fn test_extract_tools_is_case_insensitive_substring() {
        let tools = extract_tools("We ship javascript services on kubernetes.");
        // "java" is a substring of "javascript"
        assert_eq!(tools, vec!["Kubernetes", "Java", "JavaScript"]);
    }

    #[test]
    fn test_extract_tools_empty_text() {
        assert!(extract_tools("").is_empty());
    }

    #[test]
    fn test_extract_keywords_normalizes_and_filters() {
        let keywords = extract_keywords("Senior Rust-Engineer: build scalable, SCALABLE systems!");
        // "rust" is too short; "scalable" appears twice
        assert_eq!(
            keywords,
            vec!["senior", "engineer", "build", "scalable", "systems"]
        );
    }

    #[test]
    fn test_extract_keywords_takes_twenty_before_dedup() {
        let mut text = "repeat ".repeat(19);
        text.push_str("first second");
        let keywords = extract_keywords(&text);
        // 19 copies of "repeat" plus "first" fill the window; "second" is past it
        assert_eq!(keywords, vec!["repeat", "first"]);
    }

    #[test]
    fn test_extract_keywords_caps_at_twenty() {
        let text: Vec<String> = (0..40).map(|i| format!("token{i:02}")).collect();
        let keywords = extract_keywords(&text.join(" "));
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "token00");
        assert_eq!(keywords[19], "token19");
    }

    #[test]
    fn test_action_phrases_run_to_end_of_line() {
        let phrases = extract_action_phrases("Led the platform team\nDESIGNED a cache layer");
        assert_eq!(phrases, vec!["Led the platform team", "DESIGNED a cache layer"]);
    }

    #[test]
    fn test_action_phrases_are_not_word_anchored() {
        let phrases = extract_action_phrases("Highly skilled engineer");
        assert_eq!(phrases, vec!["led engineer"]);
    }

    #[test]
    fn test_detect_sections_substring_match() {
        let sections = detect_sections("PROFESSIONAL SUMMARY\nWork Experience\nEducation");
        assert_eq!(sections, vec!["experience", "education", "summary"]);
    }

    #[test]
    fn test_resume_signal_set_serializes_flat() {
        let resume = ResumeSignalSet {
            signals: SignalSet {
                skills: vec!["Rust".to_string()],
                ..Default::default()
            },
            sections: vec!["skills".to_string()],
            has_contact_info: true,
        };
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["skills"][0], "Rust");
        assert_eq!(value["has_contact_info"], true);
        assert!(value.get("signals").is_none());
    }
}
