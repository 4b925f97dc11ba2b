use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript_audio_backend::controllers::{conversion::ConversionController, voice::VoiceController};
use transcript_audio_backend::domain::conversion::{AudioAssembler, Chunker, ConversionService};
use transcript_audio_backend::domain::voice::VoiceModel;
use transcript_audio_backend::infrastructure::config::{Config, LogFormat};
use transcript_audio_backend::infrastructure::http::{build_router, start_http_server};
use transcript_audio_backend::infrastructure::repositories::DeepgramTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting transcript audio backend on {}:{}",
        config.host,
        config.port
    );

    if !config.has_deepgram_credentials() {
        tracing::warn!("DEEPGRAM_API_KEY is not set. Conversions will be rejected until it is configured");
    }

    let default_voice: VoiceModel = config.default_voice.parse()?;
    tracing::info!(
        default_voice = %default_voice,
        max_chunk_chars = config.max_chunk_chars,
        wav_header_len = config.wav_header_len,
        synthesis_concurrency = config.synthesis_concurrency,
        "Conversion pipeline configured"
    );

    let tts_repo = Arc::new(DeepgramTtsRepository::new(
        config.deepgram_base_url.clone(),
        config.deepgram_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?);

    let conversion_service = Arc::new(
        ConversionService::new(tts_repo)
            .with_chunker(Chunker::new(config.max_chunk_chars))
            .with_assembler(AudioAssembler::new(config.wav_header_len))
            .with_concurrency(config.synthesis_concurrency),
    );

    let conversion_controller = Arc::new(ConversionController::new(
        conversion_service.clone(),
        default_voice,
        config.max_transcript_chars,
    ));
    let voice_controller = Arc::new(VoiceController::new(default_voice));

    let config = Arc::new(config);
    let app = build_router(
        config.clone(),
        conversion_service,
        conversion_controller,
        voice_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "transcript_audio_backend=debug,tower_http=debug".into())
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
