// Resume extraction: upload gate, extractor boundary and the mock generator.
// Nothing here reads document contents; the mock backend stands in for a future
// parsing/AI service.

use std::time::Duration;

use thiserror::Error;

pub mod document;
pub mod extractor;
pub mod handlers;
pub mod mock;
pub mod random;
pub mod vocabulary;

/// Failures a resume extractor can report. The mock backend only ever produces
/// the upload-side ones; the rest are reserved for a real service.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("corrupt document: {0}")]
    CorruptDocument(String),

    #[error("extraction timed out after {0:?}")]
    ExtractionTimeout(Duration),

    #[error("extraction service unavailable: {0}")]
    ServiceUnavailable(String),
}
