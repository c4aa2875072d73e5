//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Listing and describing scenarios
//!   - Scoring a submitted choice
//!   - Generating Socratic hints (OpenAI or local fallback)

use tracing::{debug, error, info, instrument, warn};

use crate::domain::ScenarioSummary;
use crate::error::ScoringError;
use crate::protocol::{scenario_out, verdict_out, ScenarioOut, VerdictOut};
use crate::scoring::score;
use crate::state::AppState;
use crate::util::trunc_for_log;

/// Returned when the hint service is unavailable or fails.
pub const FALLBACK_HINT: &str = "Try researching the core concepts related to this problem.";

/// Returned when the hint service answers with an empty completion.
pub const EMPTY_HINT: &str = "Consider breaking down the problem into smaller parts.";

pub fn list_scenarios(state: &AppState) -> Vec<ScenarioSummary> {
  state.catalog.list_scenario_summaries()
}

#[instrument(level = "info", skip(state))]
pub fn describe_scenario(state: &AppState, scenario_id: &str) -> Result<ScenarioOut, ScoringError> {
  state.catalog.get_scenario(scenario_id).map(scenario_out)
}

#[instrument(level = "info", skip(state))]
pub fn submit_choice(state: &AppState, scenario_id: &str, choice_key: &str) -> Result<VerdictOut, ScoringError> {
  match score(state.catalog, scenario_id, choice_key) {
    Ok(v) => {
      let out = verdict_out(&v);
      info!(target: "simulator", %scenario_id, %choice_key, score = out.score, category = out.category.as_str(), "Choice evaluated");
      Ok(out)
    }
    Err(e) => {
      warn!(target: "simulator", %scenario_id, %choice_key, code = e.code(), "Rejected choice");
      Err(e)
    }
  }
}

#[instrument(level = "info", skip(state, question), fields(question_len = question.len()))]
pub async fn get_hint_text(state: &AppState, question: &str) -> String {
  let Some(oa) = &state.openai else {
    debug!(target: "client_simulator", "Hint via local fallback.");
    return FALLBACK_HINT.into();
  };
  match oa.socratic_hint(&state.prompts, question).await {
    Ok(t) if t.is_empty() => EMPTY_HINT.into(),
    Ok(t) => {
      debug!(target: "client_simulator", hint = %trunc_for_log(&t, 80), "Hint via OpenAI.");
      t
    }
    Err(e) => {
      error!(target: "client_simulator", error = %e, "OpenAI hint failed; using local fallback.");
      FALLBACK_HINT.into()
    }
  }
}
