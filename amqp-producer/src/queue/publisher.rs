//! Publisher for outbound text messages.
//!
//! Cheap to clone; every clone shares the same broker handle.

use std::sync::Arc;

use tracing::info;

use super::broker::Broker;
use super::error::QueueError;
use super::types::{OutboundMessage, QueueDescriptor};

/// Sends messages to a single queue through a shared broker.
#[derive(Clone)]
pub struct Publisher {
    broker: Arc<dyn Broker>,
    queue: QueueDescriptor,
}

impl Publisher {
    /// Create a publisher targeting `queue`.
    ///
    /// `queue` must be the descriptor passed to the
    /// [`QueueDeclarator`](super::QueueDeclarator) at startup.
    pub fn new(broker: Arc<dyn Broker>, queue: QueueDescriptor) -> Self {
        Self { broker, queue }
    }

    pub fn queue(&self) -> &QueueDescriptor {
        &self.queue
    }

    /// Publish `message` to the queue. Failures are returned as-is, never retried.
    pub async fn send(&self, message: OutboundMessage) -> Result<(), QueueError> {
        let body = message.into_bytes();

        self.broker.publish(self.queue.name, &body).await?;

        info!(
            queue = self.queue.name,
            body_length = body.len(),
            "rabbitmq_message_published"
        );

        Ok(())
    }
}
