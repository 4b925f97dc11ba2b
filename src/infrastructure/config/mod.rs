use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Synthesis service
    pub deepgram_api_key: String,
    pub deepgram_base_url: String,
    pub default_voice: String,
    pub request_timeout_secs: u64,
    // Conversion pipeline
    pub max_chunk_chars: usize,
    pub wav_header_len: usize,
    pub synthesis_concurrency: usize,
    pub max_transcript_chars: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            deepgram_api_key: String::new(),
            deepgram_base_url: "https://api.deepgram.com".to_string(),
            default_voice: "aura-asteria-en".to_string(),
            request_timeout_secs: 60,
            max_chunk_chars: 1800,
            wav_header_len: 44,
            synthesis_concurrency: 1,
            max_transcript_chars: 100_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        let config = Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            deepgram_api_key: env::var("DEEPGRAM_API_KEY").unwrap_or_default(),
            deepgram_base_url: env::var("DEEPGRAM_BASE_URL").unwrap_or(defaults.deepgram_base_url),
            default_voice: env::var("DEFAULT_VOICE").unwrap_or(defaults.default_voice),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            max_chunk_chars: env::var("MAX_CHUNK_CHARS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()?,
            wav_header_len: env::var("WAV_HEADER_LEN")
                .unwrap_or_else(|_| "44".to_string())
                .parse()?,
            synthesis_concurrency: env::var("SYNTHESIS_CONCURRENCY")
                .unwrap_or_else(|_| "1".to_string())
                .parse()?,
            max_transcript_chars: env::var("MAX_TRANSCRIPT_CHARS")
                .unwrap_or_else(|_| "100000".to_string())
                .parse()?,
        };

        if config.max_chunk_chars == 0 {
            return Err("MAX_CHUNK_CHARS must be greater than zero".into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn has_deepgram_credentials(&self) -> bool {
        !self.deepgram_api_key.trim().is_empty()
    }
}
