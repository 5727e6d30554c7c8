use thiserror::Error;

/// Failures talking to the broker.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to connect to broker: {0}")]
    Connect(String),

    #[error("failed to declare queue {queue}: {reason}")]
    Declare { queue: String, reason: String },

    #[error("failed to publish to queue {queue}: {reason}")]
    Publish { queue: String, reason: String },
}
