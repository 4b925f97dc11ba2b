/// Size of the canonical RIFF/WAV header emitted by the synthesis service
/// for `encoding=linear16&container=wav` responses.
pub const WAV_HEADER_LEN: usize = 44;

/// Joins independently synthesized audio segments into one playable file.
///
/// The first segment is kept whole so its header describes the merged stream;
/// every later segment contributes only the bytes after its header. Segments
/// are assumed to share sample rate, channel count and bit depth.
#[derive(Debug, Clone, Copy)]
pub struct AudioAssembler {
    header_len: usize,
}

impl Default for AudioAssembler {
    fn default() -> Self {
        Self::new(WAV_HEADER_LEN)
    }
}

impl AudioAssembler {
    pub fn new(header_len: usize) -> Self {
        Self { header_len }
    }

    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn merge(&self, segments: &[Vec<u8>]) -> Vec<u8> {
        let Some((first, rest)) = segments.split_first() else {
            return Vec::new();
        };

        let body_len: usize = rest
            .iter()
            .map(|segment| segment.len().saturating_sub(self.header_len))
            .sum();
        let mut merged = Vec::with_capacity(first.len() + body_len);
        merged.extend_from_slice(first);

        for (index, segment) in rest.iter().enumerate() {
            // header-only (or shorter) segments carry no samples
            if segment.len() <= self.header_len {
                tracing::warn!(
                    segment_index = index + 1,
                    segment_size = segment.len(),
                    header_len = self.header_len,
                    "Dropping audio segment without sample data"
                );
                continue;
            }
            merged.extend_from_slice(&segment[self.header_len..]);
        }

        merged
    }
}
