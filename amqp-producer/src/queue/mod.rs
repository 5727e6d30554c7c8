//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - The queue descriptor and outbound message types
//! - The `Broker` seam and its lapin implementation
//! - Startup queue declaration and the request-path publisher
//!
//! ## Flow
//!
//! ```text
//! startup: QueueDeclarator → Broker::declare_queue(exampleQueue, durable=false)
//! request: Publisher::send → Broker::publish("", exampleQueue, body)
//! ```

pub mod broker;
pub mod declarator;
pub mod error;
pub mod publisher;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use broker::{AmqpBroker, Broker};
pub use declarator::QueueDeclarator;
pub use error::QueueError;
pub use publisher::Publisher;
pub use types::{OutboundMessage, QueueDescriptor, EXAMPLE_QUEUE, QUEUE_NAME};
