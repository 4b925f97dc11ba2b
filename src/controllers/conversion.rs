use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension,
};
use std::sync::Arc;

use crate::{
    domain::{
        conversion::{ConversionService, ConversionServiceApi, ConvertRequest, TracingProgress},
        voice::VoiceModel,
    },
    error::{AppError, AppResult},
    infrastructure::http::{AppJson, RequestId},
};

pub const OUTPUT_FILE_NAME: &str = "transcript_audio.wav";

pub struct ConversionController {
    conversion_service: Arc<ConversionService>,
    default_voice: VoiceModel,
    max_transcript_chars: usize,
}

impl ConversionController {
    pub fn new(
        conversion_service: Arc<ConversionService>,
        default_voice: VoiceModel,
        max_transcript_chars: usize,
    ) -> Self {
        Self {
            conversion_service,
            default_voice,
            max_transcript_chars,
        }
    }

    /// POST /api/convert - Convert a transcript to a WAV file
    pub async fn convert(
        State(controller): State<Arc<ConversionController>>,
        Extension(request_id): Extension<RequestId>,
        AppJson(request): AppJson<ConvertRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let char_count = request.transcript.chars().count();
        if char_count > controller.max_transcript_chars {
            return Err(AppError::PayloadTooLarge(format!(
                "Transcript must be {} characters or less",
                controller.max_transcript_chars
            )));
        }

        let voice = match request.voice.as_deref() {
            Some(name) if !name.trim().is_empty() => name
                .parse::<VoiceModel>()
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
            _ => controller.default_voice,
        };

        tracing::info!(
            request_id = %request_id.0,
            transcript_length = char_count,
            voice = %voice,
            "Transcript conversion request"
        );

        let progress = TracingProgress {
            request_id: Some(request_id.0.clone()),
        };
        let result = controller
            .conversion_service
            .convert(&request.transcript, voice.as_str(), &progress)
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/wav"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&format!("attachment; filename=\"{}\"", OUTPUT_FILE_NAME))
                .map_err(|e| AppError::Internal(e.to_string()))?,
        );
        headers.insert("x-chunk-count", HeaderValue::from(result.chunk_count));
        headers.insert(
            "x-character-count",
            HeaderValue::from(result.character_count),
        );
        headers.insert(
            "x-voice-used",
            HeaderValue::from_str(&result.voice).map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio)))
    }
}
