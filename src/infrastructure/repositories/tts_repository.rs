use async_trait::async_trait;

/// Failure of a single synthesis request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    /// The service answered with a non-success status
    #[error("{status} - {body}")]
    Status { status: u16, body: String },
    /// The request never produced a response (connect, timeout, body read)
    #[error("{0}")]
    Transport(String),
}

impl SynthesisError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SynthesisError::Status { status, .. } => Some(*status),
            SynthesisError::Transport(_) => None,
        }
    }
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider.
///
/// One call synthesizes exactly one chunk; splitting text and merging audio
/// are handled by the caller.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one text chunk with the given voice model
    ///
    /// Returns a self-contained audio file (header followed by sample data)
    ///
    /// # Errors
    /// Returns `SynthesisError::Status` for non-success responses and
    /// `SynthesisError::Transport` when no response was received
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError>;

    /// Whether the provider has the credentials it needs to be called
    fn is_configured(&self) -> bool {
        true
    }
}
