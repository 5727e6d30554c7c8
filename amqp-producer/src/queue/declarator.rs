//! Startup queue declaration.

use std::sync::Arc;

use tracing::{error, info};

use super::broker::Broker;
use super::error::QueueError;
use super::types::QueueDescriptor;

/// Declares the service's queue once before any request is served.
pub struct QueueDeclarator {
    broker: Arc<dyn Broker>,
    queue: QueueDescriptor,
}

impl QueueDeclarator {
    pub fn new(broker: Arc<dyn Broker>, queue: QueueDescriptor) -> Self {
        Self { broker, queue }
    }

    /// Declare the queue.
    ///
    /// Re-declaring an identical queue is a no-op on the broker. A queue that
    /// already exists with different properties is rejected and returned as
    /// [`QueueError::Declare`]; callers treat that as fatal.
    pub async fn declare(&self) -> Result<(), QueueError> {
        if let Err(e) = self.broker.declare_queue(&self.queue).await {
            error!(queue = self.queue.name, error = %e, "rabbitmq_queue_declare_failed");
            return Err(e);
        }

        info!(
            queue = self.queue.name,
            durable = self.queue.durable,
            "rabbitmq_queue_declared"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::testing::RecordingBroker;
    use crate::queue::EXAMPLE_QUEUE;

    #[tokio::test]
    async fn test_declares_non_durable_queue() {
        let broker = Arc::new(RecordingBroker::new());
        let declarator = QueueDeclarator::new(broker.clone(), EXAMPLE_QUEUE);

        declarator.declare().await.unwrap();

        let declared = broker.declared();
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].name, "exampleQueue");
        assert!(!declared[0].durable);
    }

    #[tokio::test]
    async fn test_conflict_is_returned() {
        let broker = Arc::new(RecordingBroker::failing_declare());
        let declarator = QueueDeclarator::new(broker.clone(), EXAMPLE_QUEUE);

        let err = declarator.declare().await.unwrap_err();
        assert!(matches!(err, QueueError::Declare { ref queue, .. } if queue == "exampleQueue"));
        assert!(broker.declared().is_empty());
    }
}
