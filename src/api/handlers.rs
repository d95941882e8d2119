use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::api::{
    types::{AnalyzeRequest, ErrorResponse, HealthResponse},
    AppState,
};

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.to_string(),
    })
}

/// 200 with the report, 204 when there is nothing to analyze.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&req.text)).await;

    match result {
        Ok(Ok(Some(report))) => Json(report).into_response(),
        Ok(Ok(None)) => StatusCode::NO_CONTENT.into_response(),
        Ok(Err(err)) => {
            error!(error = %format!("{err:#}"), "analysis failed");
            internal_error("analysis failed")
        }
        Err(err) => {
            error!(error = %err, "analysis task aborted");
            internal_error("analysis task aborted")
        }
    }
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
