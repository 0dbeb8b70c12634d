//! Upload gate: only PDF and Word documents reach the extractor.

use bytes::Bytes;

use crate::extraction::ExtractionError;

pub const PDF_MIME: &str = "application/pdf";
pub const LEGACY_WORD_MIME: &str = "application/msword";
pub const WORD_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    LegacyWord,
    Word,
}

impl DocumentFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Ignore parameters such as "; charset=binary".
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            PDF_MIME => Some(Self::Pdf),
            LEGACY_WORD_MIME => Some(Self::LegacyWord),
            WORD_MIME => Some(Self::Word),
            _ => None,
        }
    }

    pub fn from_extension(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::LegacyWord),
            "docx" => Some(Self::Word),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::LegacyWord => LEGACY_WORD_MIME,
            Self::Word => WORD_MIME,
        }
    }
}

/// An accepted upload. Contents are carried but never parsed.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

impl ResumeFile {
    /// Validates an upload. The declared MIME type wins; the extension is only
    /// consulted when the client sent no type or a generic one.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<Self, ExtractionError> {
        let file_name = file_name.into();
        let format = match content_type {
            Some(ct) if !is_generic(ct) => DocumentFormat::from_mime(ct),
            _ => DocumentFormat::from_extension(&file_name),
        }
        .ok_or_else(|| {
            ExtractionError::UnsupportedFormat(format!(
                "{file_name} ({}); please upload a PDF or Word document",
                content_type.unwrap_or("unknown type")
            ))
        })?;

        if bytes.is_empty() {
            return Err(ExtractionError::CorruptDocument(format!(
                "{file_name} is empty"
            )));
        }

        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }
}

fn is_generic(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence.is_empty() || essence.eq_ignore_ascii_case("application/octet-stream")
}
