//! amqp-producer - HTTP to RabbitMQ bridge.
//!
//! `GET /send?message=...` publishes the message as a raw UTF-8 body to
//! the non-durable `exampleQueue` queue and answers with a confirmation.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client → web::send_message → queue::Publisher → Broker → exampleQueue
//! ```

pub mod config;
pub mod queue;
pub mod startup;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use queue::{
    AmqpBroker, Broker, OutboundMessage, Publisher, QueueDeclarator, QueueDescriptor, QueueError,
    EXAMPLE_QUEUE, QUEUE_NAME,
};
pub use startup::build_app;
pub use web::{router, AppState};
