//! Analysis pipeline — extract JD → parse resume → score → explain.
//!
//! Single analyses back the job-seeker flow; `rank_resumes` backs the
//! recruiter flow, scoring several resumes against one JD.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ats_scoring::{ResumeScorer, ScoreBreakdown};
use crate::analysis::explanation::generate_explanation;
use crate::analysis::jd_extractor::extract_jd_signals;
use crate::analysis::resume_parser::parse_resume_text;
use crate::analysis::signals::SignalSet;

const NO_RESUME_TEXT: &str = "No resume text provided. Please paste the resume content.";

/// Label for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl MatchRating {
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t >= 80.0 => MatchRating::Excellent,
            t if t >= 60.0 => MatchRating::Good,
            t if t >= 40.0 => MatchRating::Moderate,
            _ => MatchRating::Poor,
        }
    }
}

/// Result of one analysis. Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: Vec<String>,
    pub rating: MatchRating,
}

/// A named resume submitted for ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeSubmission {
    pub filename: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedResume {
    /// 1-based position after sorting.
    pub rank: usize,
    pub filename: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Runs all four stages for one JD/resume pair.
pub fn analyze(jd_text: &str, resume_text: &str, scorer: &dyn ResumeScorer) -> AnalysisResult {
    let jd = extract_jd_signals(jd_text);
    analyze_against(&jd, resume_text, scorer)
}

fn analyze_against(jd: &SignalSet, resume_text: &str, scorer: &dyn ResumeScorer) -> AnalysisResult {
    let resume = parse_resume_text(resume_text);
    let score = scorer.score(jd, &resume);
    let explanation = generate_explanation(jd, &resume, &score);

    debug!(
        backend = scorer.backend(),
        total = score.total,
        lines = explanation.len(),
        "Analysis complete"
    );

    AnalysisResult {
        total: score.total,
        rating: MatchRating::from_total(score.total),
        breakdown: score.breakdown,
        matched_skills: score.matched_skills,
        missing_skills: score.missing_skills,
        explanation,
    }
}

/// Result for a submission with no text: zero everywhere, every JD skill missing.
/// Whitespace-only text is not empty and goes through the normal analysis.
fn empty_resume_result(jd: &SignalSet) -> AnalysisResult {
    AnalysisResult {
        total: 0.0,
        breakdown: ScoreBreakdown::default(),
        matched_skills: vec![],
        missing_skills: jd.skills.clone(),
        explanation: vec![NO_RESUME_TEXT.to_string()],
        rating: MatchRating::Poor,
    }
}

/// Scores every submission against one JD and orders them by descending total.
///
/// The JD is extracted once. Analyses are independent; the sort is stable,
/// so equal totals keep submission order.
pub fn rank_resumes(
    jd_text: &str,
    submissions: Vec<ResumeSubmission>,
    scorer: &dyn ResumeScorer,
) -> Vec<RankedResume> {
    let jd = extract_jd_signals(jd_text);

    let mut scored: Vec<(String, AnalysisResult)> = submissions
        .into_iter()
        .map(|submission| {
            let result = if submission.text.is_empty() {
                empty_resume_result(&jd)
            } else {
                analyze_against(&jd, &submission.text, scorer)
            };
            (submission.filename, result)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (filename, result))| RankedResume {
            rank: index + 1,
            filename,
            result,
        })
        .collect()
}
