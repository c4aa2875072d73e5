//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{
  extract::{rejection::JsonRejection, Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use crate::error::ScoringError;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

/// Unknown ids are reported as 404 with the error tag in the body.
impl IntoResponse for ScoringError {
  fn into_response(self) -> Response {
    let body = ErrorOut { error: self.code(), message: self.to_string() };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
  }
}

/// Malformed bodies get the same tagged JSON shape, keeping axum's status code.
fn invalid_request(rejection: JsonRejection) -> Response {
  warn!(target: "client_simulator", status = %rejection.status(), "Rejected request body");
  let body = ErrorOut { error: "InvalidRequest", message: rejection.body_text() };
  (rejection.status(), Json(body)).into_response()
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_scenarios(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(list_scenarios(&state))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_scenario(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<ScenarioOut>, ScoringError> {
  let scenario = describe_scenario(&state, &id)?;
  info!(target: "simulator", id = %scenario.id, "HTTP scenario served");
  Ok(Json(scenario))
}

#[instrument(level = "info", skip_all)]
pub async fn http_post_score(
  State(state): State<Arc<AppState>>,
  body: Result<Json<ScoreIn>, JsonRejection>,
) -> Result<Json<VerdictOut>, Response> {
  let Json(body) = body.map_err(invalid_request)?;
  submit_choice(&state, &body.scenario_id, &body.choice_key)
    .map(Json)
    .map_err(IntoResponse::into_response)
}

#[instrument(level = "info", skip_all)]
pub async fn http_post_hint(
  State(state): State<Arc<AppState>>,
  body: Result<Json<HintIn>, JsonRejection>,
) -> Result<Json<HintOut>, Response> {
  let Json(body) = body.map_err(invalid_request)?;
  let text = get_hint_text(&state, &body.question).await;
  info!(target: "client_simulator", question_len = body.question.len(), "HTTP hint served");
  Ok(Json(HintOut { text }))
}
