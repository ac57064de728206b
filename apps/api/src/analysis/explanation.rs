//! Turns a score breakdown into ordered, human-readable feedback lines.

use crate::analysis::ats_scoring::{AtsScore, MIN_SECTIONS};
use crate::analysis::signals::{ResumeSignalSet, SignalSet};

const STRONG_EXPERIENCE: f64 = 20.0;
const MODERATE_EXPERIENCE: f64 = 10.0;
const EXCELLENT_KEYWORDS: f64 = 12.0;
const GOOD_KEYWORDS: f64 = 7.0;
const STRONG_TOOLS: f64 = 8.0;

/// How many missing skills are named in the suggestion line.
const MISSING_SKILLS_SHOWN: usize = 3;

/// Builds the explanation lines in a fixed order: skills matched, skills
/// missing, experience tier, keyword tier, tools, contact info, sections.
///
/// The experience line always appears; every other line is conditional, so
/// the result holds between one and seven entries.
pub fn generate_explanation(
    jd: &SignalSet,
    resume: &ResumeSignalSet,
    score: &AtsScore,
) -> Vec<String> {
    let mut explanation = Vec::new();

    if !score.matched_skills.is_empty() {
        explanation.push(format!(
            "Your resume matches {}/{} required skills from the job description.",
            score.matched_skills.len(),
            jd.skills.len()
        ));
    }

    if !score.missing_skills.is_empty() {
        let shown: Vec<&str> = score
            .missing_skills
            .iter()
            .take(MISSING_SKILLS_SHOWN)
            .map(String::as_str)
            .collect();
        explanation.push(format!(
            "Missing key skills: {}. Consider adding these if you have experience with them.",
            shown.join(", ")
        ));
    }

    let experience = score.breakdown.experience_relevance;
    let experience_line = if experience >= STRONG_EXPERIENCE {
        "Strong experience alignment detected - your resume contains relevant action verbs and experience indicators."
    } else if experience >= MODERATE_EXPERIENCE {
        "Moderate experience alignment - consider adding more specific achievements and quantifiable results."
    } else {
        "Limited experience keywords found - strengthen your resume with action verbs and specific accomplishments."
    };
    explanation.push(experience_line.to_string());

    let keywords = score.breakdown.keyword_alignment;
    if keywords >= EXCELLENT_KEYWORDS {
        explanation.push(
            "Excellent keyword alignment - your resume uses terminology that matches the job description."
                .to_string(),
        );
    } else if keywords >= GOOD_KEYWORDS {
        explanation.push(
            "Good keyword alignment - some terms match, but consider mirroring more language from the job description."
                .to_string(),
        );
    }

    if score.breakdown.tools_match >= STRONG_TOOLS {
        explanation.push(
            "Strong technology stack match - you have most of the required tools and technologies."
                .to_string(),
        );
    } else if !jd.tools.is_empty() {
        explanation.push(format!(
            "Technology gap detected - job requires {} tools/technologies, ensure you highlight relevant experience.",
            jd.tools.len()
        ));
    }

    if !resume.has_contact_info {
        explanation
            .push("Add clear contact information (email, phone) to your resume header.".to_string());
    }

    if resume.sections.len() < MIN_SECTIONS {
        explanation.push(
            "Consider adding standard sections: Experience, Skills, and Education to improve structure."
                .to_string(),
        );
    }

    explanation
}
