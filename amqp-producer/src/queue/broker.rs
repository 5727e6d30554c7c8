//! Broker access behind a trait so handlers can run against a test double.
//!
//! `AmqpBroker` holds one connection and one channel for the life of the
//! process. lapin channels are `Send + Sync` and serialize frames
//! internally, so concurrent publishes share the channel without a lock.

use std::sync::Arc;

use async_trait::async_trait;
use lapin::{
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
    BasicProperties, Channel, Connection, ConnectionProperties,
};
use tracing::{info, warn};

use super::error::QueueError;
use super::types::QueueDescriptor;

/// Operations this service needs from a message broker.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Declare `queue`, creating it if missing.
    async fn declare_queue(&self, queue: &QueueDescriptor) -> Result<(), QueueError>;

    /// Hand `body` to the broker for the queue named `queue` via the default exchange.
    async fn publish(&self, queue: &str, body: &[u8]) -> Result<(), QueueError>;
}

/// RabbitMQ broker backed by a single long-lived lapin connection.
#[derive(Clone)]
pub struct AmqpBroker {
    inner: Arc<AmqpBrokerInner>,
}

struct AmqpBrokerInner {
    connection: Connection,
    channel: Channel,
}

impl AmqpBroker {
    /// Connect to `url` and open the channel used for every publish.
    pub async fn connect(url: &str) -> Result<Self, QueueError> {
        info!(url_length = url.len(), "rabbitmq_connecting");

        let connection = Connection::connect(url, ConnectionProperties::default())
            .await
            .map_err(|e| QueueError::Connect(e.to_string()))?;

        info!("rabbitmq_connected");

        let channel = connection
            .create_channel()
            .await
            .map_err(|e| QueueError::Connect(format!("failed to create channel: {}", e)))?;

        info!(channel_id = channel.id(), "rabbitmq_channel_created");

        Ok(Self {
            inner: Arc::new(AmqpBrokerInner {
                connection,
                channel,
            }),
        })
    }

    /// Close the channel and connection gracefully.
    pub async fn close(&self) {
        if let Err(e) = self.inner.channel.close(200, "Normal shutdown").await {
            warn!(error = %e, "rabbitmq_channel_close_error");
        }

        if let Err(e) = self.inner.connection.close(200, "Normal shutdown").await {
            warn!(error = %e, "rabbitmq_connection_close_error");
        }

        info!("rabbitmq_broker_closed");
    }
}

#[async_trait]
impl Broker for AmqpBroker {
    async fn declare_queue(&self, queue: &QueueDescriptor) -> Result<(), QueueError> {
        self.inner
            .channel
            .queue_declare(
                queue.name,
                QueueDeclareOptions {
                    durable: queue.durable,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| QueueError::Declare {
                queue: queue.name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    async fn publish(&self, queue: &str, body: &[u8]) -> Result<(), QueueError> {
        // The returned confirm is dropped: sent means handed to the client.
        let _confirm = self
            .inner
            .channel
            .basic_publish(
                "",
                queue,
                BasicPublishOptions::default(),
                body,
                BasicProperties::default(),
            )
            .await
            .map_err(|e| QueueError::Publish {
                queue: queue.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
