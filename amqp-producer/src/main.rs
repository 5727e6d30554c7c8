//! amqp-producer - publishes text messages received over HTTP to RabbitMQ.
//!
//! Startup order: connect to the broker, declare the queue, then serve.
//! Any failure before the listener is bound aborts the process.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use producer::{build_app, AmqpBroker, Broker, Config, EXAMPLE_QUEUE};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("producer_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        amqp_url_set = config.amqp_url.is_some(),
        rabbitmq_host = %config.rabbitmq_host,
        rabbitmq_port = config.rabbitmq_port,
        rabbitmq_virtual_host = %config.rabbitmq_virtual_host,
        "config_loaded"
    );

    let url = config.broker_url().context("Invalid broker configuration")?;

    let broker = AmqpBroker::connect(&url)
        .await
        .context("Failed to connect to RabbitMQ")?;
    let shared: Arc<dyn Broker> = Arc::new(broker.clone());

    let app = build_app(shared, EXAMPLE_QUEUE)
        .await
        .context("Failed to declare queue")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    broker.close().await;

    info!("producer_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
