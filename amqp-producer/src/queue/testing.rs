//! In-memory broker double for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::broker::Broker;
use super::error::QueueError;
use super::types::QueueDescriptor;

/// Records every declaration and publish; optionally fails them.
#[derive(Default)]
pub struct RecordingBroker {
    fail_declare: bool,
    fail_publish: bool,
    declared: Mutex<Vec<QueueDescriptor>>,
    published: Mutex<Vec<(String, Vec<u8>)>>,
    publish_attempts: AtomicUsize,
}

impl RecordingBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_publish() -> Self {
        Self {
            fail_publish: true,
            ..Self::default()
        }
    }

    pub fn failing_declare() -> Self {
        Self {
            fail_declare: true,
            ..Self::default()
        }
    }

    pub fn declared(&self) -> Vec<QueueDescriptor> {
        self.declared.lock().unwrap().clone()
    }

    pub fn published(&self) -> Vec<(String, Vec<u8>)> {
        self.published.lock().unwrap().clone()
    }

    pub fn publish_attempts(&self) -> usize {
        self.publish_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Broker for RecordingBroker {
    async fn declare_queue(&self, queue: &QueueDescriptor) -> Result<(), QueueError> {
        if self.fail_declare {
            return Err(QueueError::Declare {
                queue: queue.name.to_string(),
                reason: "PRECONDITION_FAILED - inequivalent arg 'durable'".to_string(),
            });
        }
        self.declared.lock().unwrap().push(*queue);
        Ok(())
    }

    async fn publish(&self, queue: &str, body: &[u8]) -> Result<(), QueueError> {
        self.publish_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_publish {
            return Err(QueueError::Publish {
                queue: queue.to_string(),
                reason: "channel closed".to_string(),
            });
        }
        self.published
            .lock()
            .unwrap()
            .push((queue.to_string(), body.to_vec()));
        Ok(())
    }
}
