//! Queue and message types.
//!
//! There is one queue, declared once at startup and addressed by name on
//! every publish. Messages are raw UTF-8 strings.

/// Name of the queue every message is published to.
pub const QUEUE_NAME: &str = "exampleQueue";

/// The queue declared at startup and targeted by the publisher.
///
/// Not durable: the queue definition is lost when the broker restarts.
pub const EXAMPLE_QUEUE: QueueDescriptor = QueueDescriptor {
    name: QUEUE_NAME,
    durable: false,
};

/// Static description of a broker queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDescriptor {
    pub name: &'static str,
    pub durable: bool,
}

/// A text message on its way to the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub body: String,
}

impl OutboundMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body.into_bytes()
    }
}
