pub mod assembler;
pub mod chunker;
pub mod error;
pub mod progress;
pub mod service;

pub use assembler::{AudioAssembler, WAV_HEADER_LEN};
pub use chunker::{Chunker, DEFAULT_MAX_CHARS};
pub use error::ConversionError;
pub use progress::{ConversionEvent, NoopProgress, ProgressReporter, TracingProgress};
pub use service::{ConversionResult, ConversionService, ConversionServiceApi};
use serde::{Deserialize, Serialize};

/// Request for POST /api/convert
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}
