use super::assembler::AudioAssembler;
use super::chunker::Chunker;
use super::error::ConversionError;
use super::progress::{ConversionEvent, ProgressReporter};
use crate::domain::transcript::SpeechTextFormatter;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub audio: Vec<u8>,
    pub chunk_count: usize,
    pub character_count: usize,
    pub voice: String,
}

pub struct ConversionService {
    tts_repo: Arc<dyn TtsRepository>,
    formatter: SpeechTextFormatter,
    chunker: Chunker,
    assembler: AudioAssembler,
    concurrency: usize,
}

impl ConversionService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self {
            tts_repo,
            formatter: SpeechTextFormatter::default(),
            chunker: Chunker::default(),
            assembler: AudioAssembler::default(),
            concurrency: 1,
        }
    }

    pub fn with_formatter(mut self, formatter: SpeechTextFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn with_assembler(mut self, assembler: AudioAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Number of synthesis requests allowed in flight; 1 keeps them strictly sequential
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.tts_repo.is_configured()
    }
}

#[async_trait]
pub trait ConversionServiceApi: Send + Sync {
    /// Convert a transcript into a single audio file
    ///
    /// This operation:
    /// - Formats the transcript for speech (punctuation, pauses, speaker labels)
    /// - Splits it into chunks the synthesis service accepts
    /// - Synthesizes every chunk in order, stopping at the first failure
    /// - Merges the audio segments into one file
    async fn convert(
        &self,
        transcript: &str,
        voice: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<ConversionResult, ConversionError>;
}

#[async_trait]
impl ConversionServiceApi for ConversionService {
    async fn convert(
        &self,
        transcript: &str,
        voice: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<ConversionResult, ConversionError> {
        self.guard_preconditions(transcript, voice)?;

        let formatted = self.formatter.format(transcript);
        if formatted.is_empty() {
            return Err(ConversionError::EmptyInput(
                "Transcript contains no text to convert.".to_string(),
            ));
        }

        let chunks = self.chunker.chunk(&formatted);
        tracing::info!(
            transcript_length = transcript.len(),
            formatted_length = formatted.len(),
            chunk_count = chunks.len(),
            max_chunk_chars = self.chunker.max_chars(),
            voice = voice,
            "Transcript formatted and chunked"
        );

        if chunks.len() > 1 {
            progress.report(ConversionEvent::Chunked {
                total: chunks.len(),
            });
        }

        let segments = self.synthesize_chunks(&chunks, voice, progress).await?;
        let audio = self.assembler.merge(&segments);

        tracing::info!(
            chunk_count = chunks.len(),
            audio_size_bytes = audio.len(),
            "Audio segments merged"
        );

        Ok(ConversionResult {
            audio,
            chunk_count: chunks.len(),
            character_count: formatted.chars().count(),
            voice: voice.to_string(),
        })
    }
}

impl ConversionService {
    fn guard_preconditions(&self, transcript: &str, voice: &str) -> Result<(), ConversionError> {
        if transcript.trim().is_empty() {
            return Err(ConversionError::EmptyInput(
                "Please enter a transcript to convert.".to_string(),
            ));
        }
        if voice.trim().is_empty() {
            return Err(ConversionError::EmptyInput(
                "Please select a voice model.".to_string(),
            ));
        }
        if !self.tts_repo.is_configured() {
            return Err(ConversionError::EmptyInput(
                "Synthesis service credentials are not configured.".to_string(),
            ));
        }
        Ok(())
    }

    /// Synthesize chunks keeping chunk order; up to `concurrency` requests run at once
    /// but results are consumed in order, so the first failure seen is the earliest chunk.
    async fn synthesize_chunks(
        &self,
        chunks: &[String],
        voice: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<Vec<u8>>, ConversionError> {
        let total = chunks.len();
        let mut segments = Vec::with_capacity(total);

        let tts_repo = &self.tts_repo;
        let requests: Vec<_> = chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| async move {
                tracing::info!(
                    chunk_index = index,
                    chunk_size = chunk.len(),
                    "Synthesizing chunk"
                );
                (index, tts_repo.synthesize(chunk, voice).await)
            })
            .collect();

        let mut results = stream::iter(requests).buffered(self.concurrency);

        while let Some((index, result)) = results.next().await {
            match result {
                Ok(segment) => {
                    tracing::debug!(
                        chunk_index = index,
                        segment_size = segment.len(),
                        "Chunk synthesized"
                    );
                    segments.push(segment);
                    progress.report(ConversionEvent::ChunkCompleted {
                        completed: index + 1,
                        total,
                    });
                }
                Err(cause) => {
                    tracing::error!(
                        chunk_index = index,
                        chunk_count = total,
                        error = %cause,
                        "Chunk synthesis failed, aborting conversion"
                    );
                    return Err(ConversionError::synthesis_failure(index, cause));
                }
            }
        }

        Ok(segments)
    }
}
