use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    serve, Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::order_workflow::OrderWorkflow;
use crate::errors::AppError;
use orderflow_types::domain::order::{Order, OrderId, OrderInput};
use orderflow_types::ports::notifier::Notifier;
use orderflow_types::ports::order_store::OrderStore;
use orderflow_types::ports::user_directory::UserDirectory;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct HttpServer<S, D, N> {
    pub workflow: Arc<OrderWorkflow<S, D, N>>,
    pub config: HttpServerConfig,
}

impl<S, D, N> HttpServer<S, D, N>
where
    S: OrderStore,
    D: UserDirectory,
    N: Notifier,
{
    pub async fn new(
        workflow: OrderWorkflow<S, D, N>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            workflow: Arc::new(workflow),
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/health", get(health))
            .route("/order", post(create_order::<S, D, N>))
            .route("/order/{id}", get(get_order::<S, D, N>))
            .layer(trace_layer)
            .with_state(self.workflow.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn create_order<S, D, N>(
    State(workflow): State<Arc<OrderWorkflow<S, D, N>>>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> Result<Json<Order>, AppError>
where
    S: OrderStore,
    D: UserDirectory,
    N: Notifier,
{
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let order = workflow.create_order(input).await?;
    Ok(Json(order))
}

async fn get_order<S, D, N>(
    State(workflow): State<Arc<OrderWorkflow<S, D, N>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError>
where
    S: OrderStore,
    D: UserDirectory,
    N: Notifier,
{
    // An id that cannot have been issued is simply not found.
    let id: OrderId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("order {}", id)))?;
    let order = workflow.get_order(id).await?;
    Ok(Json(order))
}
