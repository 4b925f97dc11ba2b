use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One speaker-tagged utterance of a structured transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub speaker: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

/// Accepts any JSON value: strings as-is, `null` as absent, anything else in its JSON form
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl Utterance {
    pub fn speaker(&self) -> &str {
        self.speaker.as_deref().unwrap_or("")
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Paragraph form: `"<speaker>: <text>"`, or just the text when unlabeled
    pub fn to_paragraph(&self) -> String {
        if self.speaker().is_empty() {
            self.text().to_string()
        } else {
            format!("{}: {}", self.speaker(), self.text())
        }
    }
}

/// Raw transcript as submitted for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptInput {
    Dialogue(Vec<Utterance>),
    PlainText(String),
}

impl TranscriptInput {
    /// Interpret `raw` as a JSON array of utterances, falling back to plain text
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Vec<Utterance>>(raw) {
            Ok(utterances) => TranscriptInput::Dialogue(utterances),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    input_length = raw.len(),
                    "Transcript is not structured dialogue, treating as plain text"
                );
                TranscriptInput::PlainText(raw.to_string())
            }
        }
    }

    /// Paragraphs separated by a blank line, whitespace-trimmed
    pub fn to_text(&self) -> String {
        match self {
            TranscriptInput::Dialogue(utterances) => utterances
                .iter()
                .map(|u| u.to_paragraph())
                .collect::<Vec<_>>()
                .join("\n\n")
                .trim()
                .to_string(),
            TranscriptInput::PlainText(text) => text.trim().to_string(),
        }
    }
}
