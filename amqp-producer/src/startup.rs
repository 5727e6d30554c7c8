//! Application assembly.
//!
//! The queue is declared before the router exists, so a failed declaration
//! leaves nothing to serve.

use std::sync::Arc;

use axum::Router;

use crate::queue::{Broker, Publisher, QueueDeclarator, QueueDescriptor, QueueError};
use crate::web::{router, AppState};

/// Declare `queue` on `broker`, then wire publisher, state and routes.
pub async fn build_app(
    broker: Arc<dyn Broker>,
    queue: QueueDescriptor,
) -> Result<Router, QueueError> {
    QueueDeclarator::new(broker.clone(), queue).declare().await?;

    let publisher = Publisher::new(broker, queue);
    Ok(router(AppState::new(publisher)))
}
