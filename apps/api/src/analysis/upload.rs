//! Upload decoding — turns an uploaded resume file into plain text.
//!
//! Only plain-text files are read. PDF and Word documents are recognised and
//! rejected with a prompt to paste the text instead.

use bytes::Bytes;

use crate::errors::AppError;

const PASTE_HINT: &str = "Please paste the resume text instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    PlainText,
    Pdf,
    Word,
    Other,
}

/// Classifies an upload by content type first, then by file extension.
pub fn detect_kind(filename: &str, content_type: Option<&str>) -> UploadKind {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match (mime.as_str(), extension.as_str()) {
        ("application/pdf", _) | (_, "pdf") => UploadKind::Pdf,
        ("application/msword", _)
        | ("application/vnd.openxmlformats-officedocument.wordprocessingml.document", _)
        | (_, "doc")
        | (_, "docx") => UploadKind::Word,
        ("text/plain", _) | (_, "txt") => UploadKind::PlainText,
        _ => UploadKind::Other,
    }
}

/// Decodes an uploaded file to text, or explains why it cannot be read.
pub fn decode_upload(
    filename: &str,
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, AppError> {
    match detect_kind(filename, content_type) {
        UploadKind::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity(format!("{filename} is not valid UTF-8 text"))
        }),
        UploadKind::Pdf => Err(AppError::UnsupportedMediaType(format!(
            "PDF files cannot be read automatically. {PASTE_HINT}"
        ))),
        UploadKind::Word => Err(AppError::UnsupportedMediaType(format!(
            "Word documents cannot be read automatically. {PASTE_HINT}"
        ))),
        UploadKind::Other => Err(AppError::UnsupportedMediaType(format!(
            "Unsupported file type for {filename}. {PASTE_HINT}"
        ))),
    }
}
