use crate::domain::transcript::split_sentences;

/// Characters accepted by the synthesis service in one request
pub const DEFAULT_MAX_CHARS: usize = 1800;

/// Splits formatted text into ordered chunks of at most `max_chars` characters.
///
/// Sentences are kept whole when they fit, otherwise they are packed word by
/// word. A single word longer than the budget is cut to `max_chars` and the
/// rest of it is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

impl Chunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.chars().count() <= self.max_chars {
            return vec![text.to_string()];
        }

        let mut batch = ChunkBatch::new(self.max_chars);

        for sentence in split_sentences(text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            if !batch.try_append(sentence) {
                for word in sentence.split_whitespace() {
                    if !batch.try_append(word) {
                        batch.push_truncated(word);
                    }
                }
            }
        }

        batch.finish()
    }
}

/// Greedy accumulator: units are joined with one space while the running length fits
struct ChunkBatch {
    max_chars: usize,
    chunks: Vec<String>,
    current: String,
    current_chars: usize,
}

impl ChunkBatch {
    fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            chunks: Vec::new(),
            current: String::new(),
            current_chars: 0,
        }
    }

    /// Append `unit` to the open chunk, closing it first when the unit doesn't fit.
    /// Returns false when the unit is longer than a whole chunk.
    fn try_append(&mut self, unit: &str) -> bool {
        let unit_chars = unit.chars().count();

        if self.current_chars > 0 && self.current_chars + 1 + unit_chars <= self.max_chars {
            self.current.push(' ');
            self.current.push_str(unit);
            self.current_chars += 1 + unit_chars;
            return true;
        }

        if unit_chars > self.max_chars {
            return false;
        }

        self.close();
        self.current.push_str(unit);
        self.current_chars = unit_chars;
        true
    }

    /// Emit the first `max_chars` characters of an oversized word as its own chunk
    fn push_truncated(&mut self, word: &str) {
        self.close();
        let truncated: String = word.chars().take(self.max_chars).collect();
        tracing::warn!(
            word_chars = word.chars().count(),
            max_chars = self.max_chars,
            "Word exceeds chunk size, truncating"
        );
        self.chunks.push(truncated);
    }

    fn close(&mut self) {
        let closed = std::mem::take(&mut self.current);
        self.current_chars = 0;
        let closed = closed.trim_end();
        if !closed.is_empty() {
            self.chunks.push(closed.to_string());
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.close();
        self.chunks
    }
}
