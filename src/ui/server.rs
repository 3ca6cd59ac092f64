// Dashboard HTTP server
//
// Serves the page, the declared layout and the reactive-binding endpoint.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::binding::{Binding, Dashboard};
use super::layout::Layout;
use crate::chart::ChartSpec;
use crate::config::DashboardConfig;
use crate::error::BindingError;
use crate::state::Inputs;

const INDEX_HTML: &str = include_str!("static/index.html");

/// Body of `POST /api/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub output: String,
    #[serde(default)]
    pub inputs: Inputs,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    records: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for BindingError {
    fn into_response(self) -> Response {
        let status = match self {
            BindingError::UnknownOutput(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        log::warn!("Rejected update: {self}");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the router over a shared dashboard.
pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/layout", get(layout_handler))
        .route("/api/bindings", get(bindings_handler))
        .route("/api/update", post(update_handler))
        .with_state(dashboard)
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn serve(config: &DashboardConfig, dashboard: Arc<Dashboard>) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Dashboard running on http://{addr}/");

    axum::serve(listener, router(dashboard))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {e}");
            }
            log::info!("Shutting down");
        })
        .await
        .context("serving HTTP")
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler(State(dashboard): State<Arc<Dashboard>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: dashboard.dataset().len(),
    })
}

async fn layout_handler(State(dashboard): State<Arc<Dashboard>>) -> Json<Layout> {
    Json(dashboard.layout().clone())
}

async fn bindings_handler(State(dashboard): State<Arc<Dashboard>>) -> Json<Vec<Binding>> {
    Json(dashboard.bindings().to_vec())
}

async fn update_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<ChartSpec>, BindingError> {
    dashboard
        .dispatch(&request.output, &request.inputs)
        .map(Json)
}
