use tokio::sync::mpsc::UnboundedSender;

/// Progress of one conversion, emitted in chunk order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionEvent {
    /// The transcript was split into more than one chunk
    Chunked { total: usize },
    /// `completed` of `total` chunks have been synthesized
    ChunkCompleted { completed: usize, total: usize },
}

impl ConversionEvent {
    /// Completed share of the conversion in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        match *self {
            ConversionEvent::Chunked { .. } => 0.0,
            ConversionEvent::ChunkCompleted { completed, total } if total > 0 => {
                (completed.min(total) as f32) / total as f32
            }
            ConversionEvent::ChunkCompleted { .. } => 1.0,
        }
    }
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ConversionEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ConversionEvent) {}
}

/// Logs events through `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingProgress {
    pub request_id: Option<String>,
}

impl ProgressReporter for TracingProgress {
    fn report(&self, event: ConversionEvent) {
        let request_id = self.request_id.as_deref().unwrap_or("-");
        match event {
            ConversionEvent::Chunked { total } => tracing::info!(
                request_id = request_id,
                chunk_count = total,
                "Text is long, processing in {} chunks",
                total
            ),
            ConversionEvent::ChunkCompleted { completed, total } => tracing::info!(
                request_id = request_id,
                completed,
                total,
                progress = %format!("{:.2}", event.fraction()),
                "Chunk synthesized"
            ),
        }
    }
}

/// Forwards events to a channel; a closed receiver is ignored
impl ProgressReporter for UnboundedSender<ConversionEvent> {
    fn report(&self, event: ConversionEvent) {
        let _ = self.send(event);
    }
}
