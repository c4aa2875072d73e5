//! Typed errors for catalog lookups, scoring and the interactive flow.

use thiserror::Error;

use crate::domain::ScenarioId;

/// Lookup failures. Both are caller bugs and terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
  #[error("unknown scenario: {0}")]
  UnknownScenario(String),

  #[error("unknown choice '{choice}' for scenario {scenario}")]
  UnknownChoice { scenario: ScenarioId, choice: String },
}

impl ScoringError {
  /// Stable tag used on the wire.
  pub fn code(&self) -> &'static str {
    match self {
      ScoringError::UnknownScenario(_) => "UnknownScenario",
      ScoringError::UnknownChoice { .. } => "UnknownChoice",
    }
  }
}

/// Catalog invariant violations, detected once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  #[error("scenario {0} has no choices")]
  NoChoices(ScenarioId),

  #[error("scenario {scenario}: choice '{key}' has score {score} outside 0..=100")]
  ScoreOutOfRange { scenario: ScenarioId, key: &'static str, score: u8 },

  #[error("scenario {scenario}: duplicate choice key '{key}'")]
  DuplicateChoice { scenario: ScenarioId, key: &'static str },

  #[error("duplicate scenario {0}")]
  DuplicateScenario(ScenarioId),
}

/// Errors raised while driving the per-connection simulator flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
  #[error(transparent)]
  Scoring(#[from] ScoringError),

  #[error("cannot {action} while {from}")]
  InvalidTransition { from: &'static str, action: &'static str },
}

impl FlowError {
  pub fn code(&self) -> &'static str {
    match self {
      FlowError::Scoring(e) => e.code(),
      FlowError::InvalidTransition { .. } => "InvalidTransition",
    }
  }
}
