//! ATS Scoring — combines JD and resume signal sets into a weighted 0–100 score.
//!
//! Default: `HeuristicScorer` (pure-Rust, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>` so the backend can be swapped
//! without touching handlers or the pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::signals::{ResumeSignalSet, SignalSet};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

const SKILL_WEIGHT: f64 = 40.0;
const EXPERIENCE_WEIGHT: f64 = 25.0;
const KEYWORD_WEIGHT: f64 = 15.0;
const TOOLS_WEIGHT: f64 = 10.0;
/// Awarded once for enough sections and once for contact info.
const STRUCTURE_PART: f64 = 5.0;

/// Defaults when the JD gives nothing to compare against (half the weight).
const DEFAULT_EXPERIENCE_SCORE: f64 = 12.5;
const DEFAULT_KEYWORD_SCORE: f64 = 7.5;
const DEFAULT_TOOLS_SCORE: f64 = 5.0;

const MAX_TOTAL: f64 = 100.0;

/// Resumes need at least this many recognized sections for the structure bonus.
pub const MIN_SECTIONS: usize = 3;

/// Experience phrases only count when they contain one of these.
const CANONICAL_ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "achieved",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-category points. Components are independent; only the total is capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_relevance: f64,
    pub keyword_alignment: f64,
    pub tools_match: f64,
    pub structure: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.skill_match
            + self.experience_relevance
            + self.keyword_alignment
            + self.tools_match
            + self.structure
    }
}

/// Score plus the matched/missing partition of the JD skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub total: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends. Carried in `AppState` as
/// `Arc<dyn ResumeScorer>`.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, jd: &SignalSet, resume: &ResumeSignalSet) -> AtsScore;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Fixed linear weighting over set-overlap ratios.
pub struct HeuristicScorer;

impl ResumeScorer for HeuristicScorer {
    fn score(&self, jd: &SignalSet, resume: &ResumeSignalSet) -> AtsScore {
        calculate_ats_score(jd, resume)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a JD.
///
/// 1. Skill match (40): share of JD skills with a bidirectional substring match
/// 2. Experience relevance (25): qualifying resume phrases / qualifying JD phrases
/// 3. Keyword alignment (15): share of JD keywords also in the resume
/// 4. Tools match (10): share of JD tools with a bidirectional substring match
/// 5. Structure (10): 5 for ≥3 sections, 5 for contact info
///
/// Every ratio has an explicit default for an empty JD side, so this never
/// divides by zero.
pub fn calculate_ats_score(jd: &SignalSet, resume: &ResumeSignalSet) -> AtsScore {
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = jd
        .skills
        .iter()
        .cloned()
        .partition(|skill| contains_either_way(skill, &resume.signals.skills));

    let skill_match = ratio_or(
        matched_skills.len(),
        jd.skills.len(),
        SKILL_WEIGHT,
        0.0,
    );

    let jd_experience = count_qualifying_experience(&jd.experience_keywords);
    let resume_experience = count_qualifying_experience(&resume.signals.experience_keywords);
    // Not capped per component: a resume with more qualifying phrases than
    // the JD can exceed 25 here; only the total is clamped.
    let experience_relevance = ratio_or(
        resume_experience,
        jd_experience,
        EXPERIENCE_WEIGHT,
        DEFAULT_EXPERIENCE_SCORE,
    );

    let keyword_hits = jd
        .keywords
        .iter()
        .filter(|keyword| {
            resume
                .signals
                .keywords
                .iter()
                .any(|r| r.to_lowercase() == keyword.to_lowercase())
        })
        .count();
    let keyword_alignment = ratio_or(
        keyword_hits,
        jd.keywords.len(),
        KEYWORD_WEIGHT,
        DEFAULT_KEYWORD_SCORE,
    );

    let tool_hits = jd
        .tools
        .iter()
        .filter(|tool| contains_either_way(tool, &resume.signals.tools))
        .count();
    let tools_match = ratio_or(tool_hits, jd.tools.len(), TOOLS_WEIGHT, DEFAULT_TOOLS_SCORE);

    let mut structure = 0.0;
    if resume.sections.len() >= MIN_SECTIONS {
        structure += STRUCTURE_PART;
    }
    if resume.has_contact_info {
        structure += STRUCTURE_PART;
    }

    let breakdown = ScoreBreakdown {
        skill_match,
        experience_relevance,
        keyword_alignment,
        tools_match,
        structure,
    };
    let total = breakdown.sum().min(MAX_TOTAL);

    debug!(
        total,
        matched = matched_skills.len(),
        missing = missing_skills.len(),
        "Scored resume"
    );

    AtsScore {
        total,
        matched_skills,
        missing_skills,
        breakdown,
    }
}

/// `count / of × weight`, or `default` when there is nothing to compare against.
fn ratio_or(count: usize, of: usize, weight: f64, default: f64) -> f64 {
    if of == 0 {
        default
    } else {
        (count as f64 / of as f64) * weight
    }
}

/// True if any candidate contains `needle` or is contained in it, ignoring case.
fn contains_either_way(needle: &str, candidates: &[String]) -> bool {
    let needle_lower = needle.to_lowercase();
    candidates.iter().any(|candidate| {
        let candidate_lower = candidate.to_lowercase();
        candidate_lower.contains(&needle_lower) || needle_lower.contains(&candidate_lower)
    })
}

fn count_qualifying_experience(phrases: &[String]) -> usize {
    phrases
        .iter()
        .filter(|phrase| {
            let lower = phrase.to_lowercase();
            CANONICAL_ACTION_VERBS.iter().any(|verb| lower.contains(verb))
        })
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
