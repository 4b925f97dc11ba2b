use super::model::TranscriptInput;
use super::speaker::{normalize_speaker_name, ColonLabelDetector, SpeakerLabelDetector};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary pattern"));
static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(hi|hello|hey|dear|mr|mrs|ms|dr)\s+([A-Z][a-z]+)")
        .expect("valid greeting pattern")
});
static COORDINATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s+(and|or)\s+(\w+)").expect("valid coordination pattern"));
static DISCOURSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(well|so|now|then|actually|basically|essentially|however|meanwhile|furthermore|therefore|moreover)\s+",
    )
    .expect("valid discourse marker pattern")
});
static CONTRAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(but|yet|so)\s+").expect("valid contrast pattern"));
static WORD_AHEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w{3}").expect("valid word pattern"));
static QUESTION_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(what|when|where|why|how|who|is|are|do|does|did|can|could|would|will|should)\b",
    )
    .expect("valid question pattern")
});
static EXCLAMATION_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(wow|great|amazing|excellent|fantastic|oh|ah|yes|no)\b")
        .expect("valid exclamation pattern")
});
static TRANSITION_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(however|therefore|meanwhile|furthermore|moreover|consequently|additionally|finally)\b",
    )
    .expect("valid transition pattern")
});
static EMPHASIS_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(important|note|remember|please|understand)\b")
        .expect("valid emphasis pattern")
});

/// Splits on the whitespace that directly follows `.`, `!` or `?`.
///
/// The punctuation stays with its sentence; the whitespace is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // terminal punctuation is a single ASCII byte
        let sentence_end = boundary.start() + 1;
        sentences.push(&text[start..sentence_end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Turns raw transcripts into text tuned for speech synthesis
#[derive(Clone)]
pub struct SpeechTextFormatter {
    detector: Arc<dyn SpeakerLabelDetector>,
}

impl Default for SpeechTextFormatter {
    fn default() -> Self {
        Self::new(Arc::new(ColonLabelDetector))
    }
}

impl SpeechTextFormatter {
    pub fn new(detector: Arc<dyn SpeakerLabelDetector>) -> Self {
        Self { detector }
    }

    /// Format a JSON-or-plain-text transcript into speech-ready paragraphs
    pub fn format(&self, raw: &str) -> String {
        let text = TranscriptInput::parse(raw).to_text();
        self.enhance_text_for_speech(&text)
    }

    /// Normalize every blank-line separated paragraph, keeping speaker labels in front
    pub fn enhance_text_for_speech(&self, text: &str) -> String {
        let mut paragraphs = Vec::new();

        for paragraph in text.split("\n\n") {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }

            match self.detector.detect(paragraph) {
                Some(labeled) => paragraphs.push(format!(
                    "{}: {}",
                    normalize_speaker_name(labeled.label),
                    format_speech_text(labeled.body)
                )),
                None => paragraphs.push(format_speech_text(paragraph)),
            }
        }

        paragraphs.join("\n\n").trim().to_string()
    }
}

/// Punctuate each sentence of `text` and mark pauses around transition and emphasis words
pub fn format_speech_text(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let sentences: Vec<String> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            let sentence = capitalize_first(&add_natural_commas(sentence));
            terminate_sentence(sentence)
        })
        .collect();

    add_strategic_pauses(&sentences.join(" "))
}

/// Insert commas where a speaker would naturally pause
pub fn add_natural_commas(sentence: &str) -> String {
    let text = GREETING.replace_all(sentence, "${1}, ${2}");
    let text = COORDINATION.replace_all(&text, "${1}, ${2} ${3}");
    let text = DISCOURSE_MARKER.replace_all(&text, "${1}, ");
    add_contrast_commas(&text)
}

/// `but`/`yet`/`so` get a leading comma when followed by a word of three or more
/// characters and not already preceded by one.
fn add_contrast_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = CONTRAST.captures_at(text, search_from) {
        let (Some(whole), Some(conjunction)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let after_comma = text[..whole.start()].ends_with(',');
        let word_follows = WORD_AHEAD.is_match(&text[whole.end()..]);

        if !after_comma && word_follows {
            out.push_str(&text[copied..whole.start()]);
            out.push_str(", ");
            out.push_str(conjunction.as_str());
            out.push(' ');
            copied = whole.end();
            search_from = whole.end();
        } else {
            let step = text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            search_from = whole.start() + step;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => sentence.to_string(),
    }
}

fn terminate_sentence(mut sentence: String) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        return sentence;
    }

    if QUESTION_WORD.is_match(&sentence) {
        sentence.push('?');
    } else if EXCLAMATION_WORD.is_match(&sentence) {
        sentence.push('!');
    } else {
        sentence.push('.');
    }
    sentence
}

/// Double-hyphen pause after transition words and before emphasis words
pub fn add_strategic_pauses(text: &str) -> String {
    let text = TRANSITION_WORD.replace_all(text, "${1} --");
    EMPHASIS_WORD.replace_all(&text, "-- ${1}").into_owned()
}
