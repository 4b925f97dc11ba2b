use crate::e2e::helpers;

use helpers::{
    fixtures::{fake_audio, FakeTtsRepository, HEADER_LEN},
    test_config, TestContext,
};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use transcript_audio_backend::domain::{conversion::Chunker, transcript::SpeechTextFormatter};
use transcript_audio_backend::infrastructure::config::Config;

/// Bytes the fake produces for `chunks`, merged the way the service merges them
fn expected_audio(chunks: &[String]) -> Vec<u8> {
    let mut audio = Vec::new();
    for (call, chunk) in chunks.iter().enumerate() {
        let segment = fake_audio(call, chunk);
        if call == 0 {
            audio.extend_from_slice(&segment);
        } else {
            audio.extend_from_slice(&segment[HEADER_LEN..]);
        }
    }
    audio
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_convert_plain_text_to_wav(ctx: &TestContext) {
    let transcript = "this is plain text without json";
    let formatted = SpeechTextFormatter::default().format(transcript);

    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": transcript }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav")
        .assert_header(
            "content-disposition",
            "attachment; filename=\"transcript_audio.wav\"",
        )
        .assert_header("x-chunk-count", "1")
        .assert_header(
            "x-character-count",
            &formatted.chars().count().to_string(),
        )
        .assert_header("x-voice-used", "aura-asteria-en");

    assert_eq!(response.body_bytes, fake_audio(0, &formatted));
    assert_eq!(ctx.tts.texts(), vec![formatted]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_format_dialogue_before_synthesis(ctx: &TestContext) {
    let transcript = json!([
        { "speaker": "Speaker 1", "text": "hello, how are you" },
        { "speaker": "Speaker 2", "text": "fine thanks" }
    ])
    .to_string();
    let formatted = SpeechTextFormatter::default().format(&transcript);

    let response = ctx
        .client
        .post(
            "/api/convert",
            &json!({ "transcript": transcript, "voice": "aura-zeus-en" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-voice-used", "aura-zeus-en");

    let calls = ctx.tts.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, formatted);
    assert_eq!(calls[0].1, "aura-zeus-en");
    assert!(!calls[0].0.contains('['));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_voice_names_case_insensitively(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/convert",
            &json!({ "transcript": "Good morning.", "voice": "AURA-LUNA-EN" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-voice-used", "aura-luna-en");
}

#[tokio::test]
async fn it_should_merge_multiple_chunks_in_order() {
    let config = Config {
        max_chunk_chars: 20,
        ..test_config()
    };
    let ctx = TestContext::with_fake(FakeTtsRepository::new(), config)
        .await
        .unwrap();

    let transcript = "The cat sat down. The dog ran off. The bird flew away.";
    let formatted = SpeechTextFormatter::default().format(transcript);
    let chunks = Chunker::new(20).chunk(&formatted);
    assert!(chunks.len() > 1);

    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": transcript }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-chunk-count", &chunks.len().to_string());

    assert_eq!(ctx.tts.texts(), chunks);
    assert_eq!(response.body_bytes, expected_audio(&chunks));
    assert_eq!(&response.body_bytes[..4], b"RIFF");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_transcript(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": "   \n " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Please enter a transcript");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_transcript_without_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": "[]" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Transcript contains no text to convert.");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/convert",
            &json!({ "transcript": "Hello there.", "voice": "aura-nobody-en" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown voice model: aura-nobody-en");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_default_voice_when_blank(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/convert",
            &json!({ "transcript": "Hello there.", "voice": "" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-voice-used", "aura-asteria-en");
}

#[tokio::test]
async fn it_should_reject_oversized_transcript() {
    let config = Config {
        max_transcript_chars: 50,
        ..test_config()
    };
    let ctx = TestContext::with_fake(FakeTtsRepository::new(), config)
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": "a".repeat(51) }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("Transcript must be 50 characters or less");
    assert!(ctx.tts.calls().is_empty());
}

#[tokio::test]
async fn it_should_stop_at_first_failed_chunk() {
    let config = Config {
        max_chunk_chars: 20,
        ..test_config()
    };
    let ctx = TestContext::with_fake(FakeTtsRepository::failing_on(1), config)
        .await
        .unwrap();

    let transcript = "The cat sat down. The dog ran off. The bird flew away.";

    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": transcript }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Error from synthesis service (chunk 2): 500 - synthesis exploded");
    assert_eq!(ctx.tts.calls().len(), 2);
}

#[tokio::test]
async fn it_should_reject_conversion_without_credentials() {
    let ctx = TestContext::with_fake(FakeTtsRepository::unconfigured(), test_config())
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/api/convert", &json!({ "transcript": "Hello there." }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Synthesis service credentials are not configured.");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_request_without_transcript(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/convert", &json!({ "voice": "aura-asteria-en" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("missing field `transcript`");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_request_body_of_wrong_shape(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/convert", &json!("just a string"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Failed to deserialize the JSON body");
    assert!(ctx.tts.calls().is_empty());
}
