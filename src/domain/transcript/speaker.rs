use once_cell::sync::Lazy;
use regex::Regex;

static LABELED_PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([^:]+):\s*(.+)$").expect("valid labeled paragraph pattern"));
static SPEAKER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Speaker\s*(\d+)").expect("valid speaker pattern"));
static USER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)User\s*(\d+)").expect("valid user pattern"));

/// A paragraph split into its speaker label and spoken body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledParagraph<'a> {
    pub label: &'a str,
    pub body: &'a str,
}

/// Decides whether a paragraph is dialogue attributed to a speaker.
///
/// Implementations receive an already-trimmed paragraph.
pub trait SpeakerLabelDetector: Send + Sync {
    fn detect<'a>(&self, paragraph: &'a str) -> Option<LabeledParagraph<'a>>;
}

/// Treats everything before the first colon as a speaker label.
///
/// Any prose containing a colon (`"Note: the meeting moved"`) is read as
/// dialogue too, so `Note` becomes a speaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColonLabelDetector;

impl SpeakerLabelDetector for ColonLabelDetector {
    fn detect<'a>(&self, paragraph: &'a str) -> Option<LabeledParagraph<'a>> {
        let caps = LABELED_PARAGRAPH.captures(paragraph)?;
        let label = caps.get(1)?.as_str().trim();
        let body = caps.get(2)?.as_str().trim();
        Some(LabeledParagraph { label, body })
    }
}

/// Canonical spacing for numbered labels: `speaker3` -> `Speaker 3`, `USER  2` -> `User 2`
pub fn normalize_speaker_name(label: &str) -> String {
    let label = SPEAKER_NUMBER.replace_all(label, "Speaker ${1}");
    USER_NUMBER.replace_all(&label, "User ${1}").into_owned()
}
