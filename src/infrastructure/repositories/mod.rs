pub mod deepgram_tts_repository;
pub mod tts_repository;

pub use deepgram_tts_repository::DeepgramTtsRepository;
pub use tts_repository::{SynthesisError, TtsRepository};
