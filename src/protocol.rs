//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Scenario, ScenarioId, ScenarioSummary, Verdict};
use crate::scoring::categorize;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
  Ping,
  ListScenarios,
  SelectScenario {
    #[serde(rename = "scenarioId")]
    scenario_id: String,
  },
  BeginAnswer,
  SubmitChoice {
    #[serde(rename = "choiceKey")]
    choice_key: String,
  },
  Retry,
  BackToSelection,
  Hint {
    question: String,
  },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
  Pong,
  Scenarios {
    scenarios: Vec<ScenarioSummary>,
  },
  Scenario {
    scenario: ScenarioOut,
  },
  Answering {
    #[serde(rename = "scenarioId")]
    scenario_id: ScenarioId,
  },
  Verdict {
    verdict: VerdictOut,
  },
  Selecting,
  Hint {
    text: String,
  },
  Error {
    code: String,
    message: String,
  },
}

/// Scenario as shown to the learner. Scores stay server-side until a choice is submitted.
#[derive(Debug, Serialize)]
pub struct ScenarioOut {
  pub id: ScenarioId,
  pub title: &'static str,
  pub description: &'static str,
  pub situation: &'static str,
  pub choices: Vec<ChoiceOut>,
}

#[derive(Debug, Serialize)]
pub struct ChoiceOut {
  pub key: &'static str,
  pub text: &'static str,
}

/// Convert a catalog `Scenario` to the public DTO.
pub fn scenario_out(s: &Scenario) -> ScenarioOut {
  ScenarioOut {
    id: s.id,
    title: s.title,
    description: s.description,
    situation: s.situation,
    choices: s.choices.iter().map(|c| ChoiceOut { key: c.key, text: c.text }).collect(),
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictOut {
  pub score: u8,
  pub category: Category,
  pub feedback: &'static str,
  pub best_practice: &'static str,
  pub learning_points: [&'static str; 3],
}

pub fn verdict_out(v: &Verdict) -> VerdictOut {
  VerdictOut {
    score: v.score,
    category: categorize(v.score),
    feedback: v.feedback,
    best_practice: v.best_practice,
    learning_points: v.learning_points,
  }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreIn {
  pub scenario_id: String,
  pub choice_key: String,
}

#[derive(Deserialize)]
pub struct HintIn {
  pub question: String,
}
#[derive(Serialize)]
pub struct HintOut {
  pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
  pub error: &'static str,
  pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}
