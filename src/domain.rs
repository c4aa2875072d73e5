//! Domain models used by the simulator: scenario ids, scenarios, choices, verdicts and categories.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoringError;

/// Which trouble situation is being played?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioId {
  /// Client keeps adding features after the contract was signed.
  ScopeCreep,
  /// Client withholds payment past the due date.
  PaymentDelay,
  /// Client demands a redesign after an approved delivery.
  SpecChange,
}

impl ScenarioId {
  /// Display order on the selection screen.
  pub const ALL: [ScenarioId; 3] = [ScenarioId::ScopeCreep, ScenarioId::PaymentDelay, ScenarioId::SpecChange];

  /// Wire form, identical to the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      ScenarioId::ScopeCreep => "scopeCreep",
      ScenarioId::PaymentDelay => "paymentDelay",
      ScenarioId::SpecChange => "specChange",
    }
  }
}

impl fmt::Display for ScenarioId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ScenarioId {
  type Err = ScoringError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ScenarioId::ALL
      .into_iter()
      .find(|id| id.as_str() == s)
      .ok_or_else(|| ScoringError::UnknownScenario(s.to_string()))
  }
}

/// One selectable response. `key` is the lookup key; `text` is display only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
  pub key: &'static str,
  pub text: &'static str,
  pub score: u8,
  pub feedback: &'static str,
  pub best_practice: &'static str,
}

/// A fixed trouble situation with its ordered choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
  pub id: ScenarioId,
  pub title: &'static str,
  pub description: &'static str,
  pub situation: &'static str,
  pub choices: Vec<Choice>,
}

impl Scenario {
  pub fn choice(&self, key: &str) -> Option<&Choice> {
    self.choices.iter().find(|c| c.key == key)
  }
}

/// Entry for the selection screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
  pub id: ScenarioId,
  pub title: &'static str,
  pub description: &'static str,
}

/// Result of scoring one choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
  pub score: u8,
  pub feedback: &'static str,
  pub best_practice: &'static str,
  pub learning_points: [&'static str; 3],
}

/// Coarse verdict band used for styling (success / caution / failure).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Excellent,
  Good,
  Poor,
}

impl Category {
  pub fn as_str(self) -> &'static str {
    match self {
      Category::Excellent => "excellent",
      Category::Good => "good",
      Category::Poor => "poor",
    }
  }
}
