// Resume analysis: signal extraction, ATS scoring, explanations, ranking.
// The four stages are pure functions; handlers and the pipeline orchestrate them.

pub mod ats_scoring;
pub mod explanation;
pub mod handlers;
pub mod jd_extractor;
pub mod pipeline;
pub mod resume_parser;
pub mod signals;
pub mod upload;
