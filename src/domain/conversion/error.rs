use crate::error::AppError;
use crate::infrastructure::repositories::SynthesisError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A precondition is missing: blank transcript, voice or credentials
    #[error("{0}")]
    EmptyInput(String),
    /// One chunk failed to synthesize; `chunk_index` is zero-based
    #[error("Error from synthesis service (chunk {}): {message}", .chunk_index + 1)]
    SynthesisFailure {
        chunk_index: usize,
        status_code: Option<u16>,
        message: String,
    },
}

impl ConversionError {
    pub fn synthesis_failure(chunk_index: usize, cause: SynthesisError) -> Self {
        ConversionError::SynthesisFailure {
            chunk_index,
            status_code: cause.status_code(),
            message: cause.to_string(),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::EmptyInput(msg) => AppError::BadRequest(msg),
            failure @ ConversionError::SynthesisFailure { .. } => {
                AppError::SynthesisFailed(failure.to_string())
            }
        }
    }
}
