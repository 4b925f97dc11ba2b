use super::tts_repository::{SynthesisError, TtsRepository};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const SPEAK_PATH: &str = "/v1/speak";

/// Linear PCM in a WAV container, so every response starts with the
/// fixed-size header the assembler strips.
const ENCODING: &str = "linear16";
const CONTAINER: &str = "wav";

#[derive(Debug, Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
}

/// Deepgram Aura implementation of TTS repository
pub struct DeepgramTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DeepgramTtsRepository {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, SynthesisError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SynthesisError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn speak_url(&self) -> String {
        format!("{}{}", self.base_url, SPEAK_PATH)
    }
}

#[async_trait]
impl TtsRepository for DeepgramTtsRepository {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = voice,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling Deepgram speak API"
        );

        let response = self
            .http_client
            .post(self.speak_url())
            .query(&[("model", voice), ("encoding", ENCODING), ("container", CONTAINER)])
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&SpeakRequest { text })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice = voice,
                    text_length = text.len(),
                    "Deepgram speak request failed"
                );
                SynthesisError::Transport(format!("Error calling Deepgram API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice = voice,
                "Deepgram speak API returned an error"
            );
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Transport(format!("Failed to read audio body: {}", e)))?
            .to_vec();

        let duration = start_time.elapsed();
        tracing::debug!(
            provider = "deepgram",
            voice = voice,
            latency_ms = duration.as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "Deepgram audio received"
        );

        Ok(audio_bytes)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
