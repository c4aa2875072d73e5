//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers), adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/scenarios", get(http::http_list_scenarios))
        .route("/api/v1/scenarios/:id", get(http::http_get_scenario))
        .route("/api/v1/score", post(http::http_post_score))
        .route("/api/v1/hint", post(http::http_post_hint))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::logic::FALLBACK_HINT;

    fn app() -> Router {
        build_router(Arc::new(AppState::for_tests()))
    }

    async fn call(req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = app().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ── GET /api/v1/health ───────────────────────────────────────────

    #[tokio::test]
    async fn health_is_ok() {
        let (status, json) = call(Request::get("/api/v1/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }

    // ── GET /api/v1/scenarios ────────────────────────────────────────

    #[tokio::test]
    async fn lists_three_scenarios_in_order() {
        let (status, json) = call(Request::get("/api/v1/scenarios").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["scopeCreep", "paymentDelay", "specChange"]);
    }

    #[tokio::test]
    async fn scenario_detail_and_unknown_id() {
        let (status, json) =
            call(Request::get("/api/v1/scenarios/specChange").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["choices"][0]["key"], "cite-approval");
        assert!(json["situation"].as_str().unwrap().contains("承認済み"));

        let (status, json) =
            call(Request::get("/api/v1/scenarios/burnout").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "UnknownScenario");
    }

    // ── POST /api/v1/score ───────────────────────────────────────────

    #[tokio::test]
    async fn scores_choice() {
        let body = serde_json::json!({ "scenarioId": "scopeCreep", "choiceKey": "accept-immediately" });
        let (status, json) = call(post_json("/api/v1/score", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 20);
        assert_eq!(json["category"], "poor");
        assert!(json["feedback"].as_str().unwrap().contains("危険"));
        assert_eq!(json["learningPoints"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn score_errors_are_tagged() {
        let body = serde_json::json!({ "scenarioId": "scopeCreep", "choiceKey": "ghost-client" });
        let (status, json) = call(post_json("/api/v1/score", body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "UnknownChoice");

        let body = serde_json::json!({ "scenarioId": "ghost", "choiceKey": "quote-and-extend" });
        let (_, json) = call(post_json("/api/v1/score", body)).await;
        assert_eq!(json["error"], "UnknownScenario");
    }

    #[tokio::test]
    async fn malformed_score_body_is_tagged_json() {
        let body = serde_json::json!({ "scenarioId": "scopeCreep" });
        let (status, json) = call(post_json("/api/v1/score", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "InvalidRequest");
        assert!(json["message"].as_str().unwrap().contains("choiceKey"));

        let req = Request::post("/api/v1/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, json) = call(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "InvalidRequest");
    }

    // ── POST /api/v1/hint ────────────────────────────────────────────

    #[tokio::test]
    async fn hint_uses_fallback_offline() {
        let body = serde_json::json!({ "question": "Why does my flexbox overflow?" });
        let (status, json) = call(post_json("/api/v1/hint", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["text"], FALLBACK_HINT);
    }
}
