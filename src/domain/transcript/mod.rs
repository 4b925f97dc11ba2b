pub mod formatter;
pub mod model;
pub mod speaker;

pub use formatter::{split_sentences, SpeechTextFormatter};
pub use model::{TranscriptInput, Utterance};
pub use speaker::{normalize_speaker_name, ColonLabelDetector, LabeledParagraph, SpeakerLabelDetector};
