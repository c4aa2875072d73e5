//! Interactive simulator flow: Selecting → Viewing → Answering → Scored.
//!
//! One flow per connected client. Nothing here outlives the connection.

use tracing::debug;

use crate::catalog::ScenarioCatalog;
use crate::domain::{Scenario, ScenarioId, Verdict};
use crate::error::FlowError;
use crate::scoring::score;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
  Selecting,
  Viewing(ScenarioId),
  Answering(ScenarioId),
  Scored { scenario: ScenarioId, verdict: Verdict },
}

impl FlowState {
  pub fn name(&self) -> &'static str {
    match self {
      FlowState::Selecting => "selecting",
      FlowState::Viewing(_) => "viewing",
      FlowState::Answering(_) => "answering",
      FlowState::Scored { .. } => "scored",
    }
  }
}

pub struct SimulatorFlow<'a> {
  catalog: &'a ScenarioCatalog,
  state: FlowState,
}

impl<'a> SimulatorFlow<'a> {
  pub fn new(catalog: &'a ScenarioCatalog) -> Self {
    Self { catalog, state: FlowState::Selecting }
  }

  pub fn state(&self) -> &FlowState {
    &self.state
  }

  /// Pick a scenario from any state. An unknown id drops back to `Selecting`.
  pub fn select(&mut self, scenario_id: &str) -> Result<&'a Scenario, FlowError> {
    match self.catalog.get_scenario(scenario_id) {
      Ok(s) => {
        self.transition(FlowState::Viewing(s.id));
        Ok(s)
      }
      Err(e) => {
        self.transition(FlowState::Selecting);
        Err(e.into())
      }
    }
  }

  pub fn begin_answer(&mut self) -> Result<ScenarioId, FlowError> {
    match self.state {
      FlowState::Viewing(id) => {
        self.transition(FlowState::Answering(id));
        Ok(id)
      }
      _ => Err(self.invalid("begin answering")),
    }
  }

  /// Score a choice. A lookup failure drops back to `Selecting`, like `select`.
  pub fn submit(&mut self, choice_key: &str) -> Result<Verdict, FlowError> {
    let FlowState::Answering(id) = self.state else {
      return Err(self.invalid("submit a choice"));
    };
    match score(self.catalog, id.as_str(), choice_key) {
      Ok(verdict) => {
        self.transition(FlowState::Scored { scenario: id, verdict: verdict.clone() });
        Ok(verdict)
      }
      Err(e) => {
        self.transition(FlowState::Selecting);
        Err(e.into())
      }
    }
  }

  /// Retry the scored scenario, discarding the previous choice.
  pub fn retry(&mut self) -> Result<ScenarioId, FlowError> {
    match self.state {
      FlowState::Scored { scenario, .. } => {
        self.transition(FlowState::Answering(scenario));
        Ok(scenario)
      }
      _ => Err(self.invalid("retry")),
    }
  }

  pub fn back_to_selection(&mut self) {
    self.transition(FlowState::Selecting);
  }

  fn transition(&mut self, next: FlowState) {
    debug!(target: "simulator", from = self.state.name(), to = next.name(), "Flow transition");
    self.state = next;
  }

  fn invalid(&self, action: &'static str) -> FlowError {
    FlowError::InvalidTransition { from: self.state.name(), action }
  }
}
