//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the finished application router with request tracing and timeouts
//! - Bind the router to a listener
//! - Stop gracefully when the shutdown signal fires

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;

/// HTTP server for a documented application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server around `app`, typically the output of
    /// `DocRouter::finish`.
    pub fn new(config: AppConfig, app: Router) -> Self {
        let router = Self::wrap(&config, app);
        Self { router, config }
    }

    #[allow(deprecated)]
    fn wrap(config: &AppConfig, app: Router) -> Router {
        app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Serve until `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
