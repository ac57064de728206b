//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::jd_extractor::extract_jd_signals;
use crate::analysis::pipeline::{
    analyze, rank_resumes, AnalysisResult, RankedResume, ResumeSubmission,
};
use crate::analysis::resume_parser::parse_resume_text;
use crate::analysis::signals::{ResumeSignalSet, SignalSet};
use crate::analysis::upload::decode_upload;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSignalsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub jd_text: String,
    pub resumes: Vec<ResumeSubmission>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub rankings: Vec<RankedResume>,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub filename: String,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/signals/job-description
///
/// Returns the signals extracted from a job description. Empty text is valid.
pub async fn handle_extract_jd_signals(
    Json(request): Json<ExtractSignalsRequest>,
) -> Json<SignalSet> {
    Json(extract_jd_signals(&request.text))
}

/// POST /api/v1/signals/resume
///
/// Returns the signals extracted from resume text. Empty text is valid.
pub async fn handle_extract_resume_signals(
    Json(request): Json<ExtractSignalsRequest>,
) -> Json<ResumeSignalSet> {
    Json(parse_resume_text(&request.text))
}

/// POST /api/v1/analysis
///
/// Scores one resume against a job description and explains the result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty; paste the resume content".to_string(),
        ));
    }

    let result = analyze(
        &request.jd_text,
        &request.resume_text,
        state.scorer.as_ref(),
    );
    info!(total = result.total, rating = ?result.rating, "Resume analyzed");

    Ok(Json(result))
}

/// POST /api/v1/analysis/rank
///
/// Ranks several resumes against one job description, highest score first.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation(
            "resumes must contain at least one entry".to_string(),
        ));
    }
    let max = state.config.max_batch_resumes;
    if request.resumes.len() > max {
        return Err(AppError::Validation(format!(
            "At most {max} resumes can be ranked at once, got {}",
            request.resumes.len()
        )));
    }

    let count = request.resumes.len();
    let scorer = state.scorer.clone();
    let rankings = tokio::task::spawn_blocking(move || {
        rank_resumes(&request.jd_text, request.resumes, scorer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    info!(count, "Resumes ranked");

    Ok(Json(RankResponse { rankings }))
}

/// POST /api/v1/resumes/extract-text
///
/// Reads the `file` part of a multipart upload as plain text. PDF and Word
/// files are rejected with a prompt to paste the text instead.
pub async fn handle_extract_text(
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let text = decode_upload(&filename, content_type.as_deref(), data)?;
        info!(%filename, bytes = text.len(), "Upload decoded");

        return Ok(Json(ExtractTextResponse { filename, text }));
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pipeline::MatchRating;
    use crate::config::Config;

    fn test_state(max_batch_resumes: usize) -> AppState {
        AppState::new(Config {
            max_batch_resumes,
            ..Config::default()
        })
    }

    fn submission(filename: &str, text: &str) -> ResumeSubmission {
        ResumeSubmission {
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_extract_jd_signals_handler() {
        let Json(signals) = handle_extract_jd_signals(Json(ExtractSignalsRequest {
            text: "Skills: Python, SQL, Docker".to_string(),
        }))
        .await;
        assert_eq!(signals.skills, vec!["Python", "SQL", "Docker"]);
    }

    #[tokio::test]
    async fn test_extract_resume_signals_handler_accepts_empty_text() {
        let Json(signals) = handle_extract_resume_signals(Json(ExtractSignalsRequest {
            text: String::new(),
        }))
        .await;
        assert_eq!(signals, ResumeSignalSet::default());
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_jd() {
        let result = handle_analyze(
            State(test_state(5)),
            Json(AnalyzeRequest {
                jd_text: "   ".to_string(),
                resume_text: "Skills: Rust".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_resume() {
        let result = handle_analyze(
            State(test_state(5)),
            Json(AnalyzeRequest {
                jd_text: "Skills: Rust".to_string(),
                resume_text: String::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_returns_result() {
        let Json(result) = handle_analyze(
            State(test_state(5)),
            Json(AnalyzeRequest {
                jd_text: "Skills: Python, SQL, Docker".to_string(),
                resume_text: "Skills: Python, AWS".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["SQL", "Docker"]);
        assert_eq!(result.rating, MatchRating::Poor);
    }

    #[tokio::test]
    async fn test_rank_enforces_batch_limit() {
        let resumes = (0..3)
            .map(|i| submission(&format!("r{i}.txt"), "Skills: Rust"))
            .collect();
        let result = handle_rank(
            State(test_state(2)),
            Json(RankRequest {
                jd_text: "Skills: Rust".to_string(),
                resumes,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rank_rejects_empty_batch() {
        let result = handle_rank(
            State(test_state(5)),
            Json(RankRequest {
                jd_text: "Skills: Rust".to_string(),
                resumes: vec![],
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rank_returns_sorted_rankings() {
        let Json(response) = handle_rank(
            State(test_state(5)),
            Json(RankRequest {
                jd_text: "Skills: Rust, Kafka".to_string(),
                resumes: vec![
                    submission("blank.pdf", ""),
                    submission("rust.txt", "Skills: Rust, Kafka\nalex@example.com"),
                ],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.rankings.len(), 2);
        assert_eq!(response.rankings[0].filename, "rust.txt");
        assert_eq!(response.rankings[1].filename, "blank.pdf");
        assert_eq!(response.rankings[1].result.total, 0.0);
    }
}
