//! Read-only scenario registry.
//!
//! Built once per process from the compiled-in seeds and handed out as `&'static`,
//! so any number of tasks can read it without locking.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{info, instrument};

use crate::domain::{Scenario, ScenarioId, ScenarioSummary};
use crate::error::{CatalogError, ScoringError};
use crate::seeds::seed_scenarios;

#[derive(Debug)]
pub struct ScenarioCatalog {
  scenarios: Vec<Scenario>,
}

static BUILTIN: OnceLock<ScenarioCatalog> = OnceLock::new();

impl ScenarioCatalog {
  pub fn new(scenarios: Vec<Scenario>) -> Self {
    Self { scenarios }
  }

  /// Process-wide catalog of the built-in scenarios.
  pub fn builtin() -> &'static ScenarioCatalog {
    BUILTIN.get_or_init(|| ScenarioCatalog::new(seed_scenarios()))
  }

  /// Look up a scenario by its wire id.
  pub fn get_scenario(&self, id: &str) -> Result<&Scenario, ScoringError> {
    let id: ScenarioId = id.parse()?;
    self.get(id).ok_or_else(|| ScoringError::UnknownScenario(id.to_string()))
  }

  pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
    self.scenarios.iter().find(|s| s.id == id)
  }

  /// Summaries for the selection screen, in definition order.
  pub fn list_scenario_summaries(&self) -> Vec<ScenarioSummary> {
    self
      .scenarios
      .iter()
      .map(|s| ScenarioSummary { id: s.id, title: s.title, description: s.description })
      .collect()
  }

  pub fn scenarios(&self) -> &[Scenario] {
    &self.scenarios
  }

  /// Check catalog invariants: non-empty choices, scores within 0..=100, unique keys and ids.
  #[instrument(level = "info", skip(self), fields(scenarios = self.scenarios.len()))]
  pub fn validate(&self) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for s in &self.scenarios {
      if !ids.insert(s.id) {
        return Err(CatalogError::DuplicateScenario(s.id));
      }
      if s.choices.is_empty() {
        return Err(CatalogError::NoChoices(s.id));
      }
      let mut keys = HashSet::new();
      for c in &s.choices {
        if c.score > 100 {
          return Err(CatalogError::ScoreOutOfRange { scenario: s.id, key: c.key, score: c.score });
        }
        if !keys.insert(c.key) {
          return Err(CatalogError::DuplicateChoice { scenario: s.id, key: c.key });
        }
      }
      info!(target: "simulator", scenario = %s.id, choices = s.choices.len(), "Scenario loaded");
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Choice;

  fn choice(key: &'static str, score: u8) -> Choice {
    Choice { key, text: "t", score, feedback: "f", best_practice: "b" }
  }

  fn scenario(id: ScenarioId, choices: Vec<Choice>) -> Scenario {
    Scenario { id, title: "t", description: "d", situation: "s", choices }
  }

  #[test]
  fn builtin_catalog_is_valid() {
    let cat = ScenarioCatalog::builtin();
    assert_eq!(cat.validate(), Ok(()));
    for s in cat.scenarios() {
      assert!(!s.choices.is_empty());
      assert!(s.choices.iter().all(|c| c.score <= 100));
    }
  }

  #[test]
  fn summaries_are_three_in_stable_order() {
    let cat = ScenarioCatalog::builtin();
    let first = cat.list_scenario_summaries();
    let ids: Vec<_> = first.iter().map(|s| s.id).collect();
    assert_eq!(ids, ScenarioId::ALL.to_vec());
    assert_eq!(first, cat.list_scenario_summaries());
    assert!(first[0].title.contains("スコープクリープ"));
  }

  #[test]
  fn get_scenario_by_wire_id() {
    let cat = ScenarioCatalog::builtin();
    let s = cat.get_scenario("paymentDelay").unwrap();
    assert_eq!(s.id, ScenarioId::PaymentDelay);
    assert_eq!(s.choices.len(), 3);
    assert_eq!(
      cat.get_scenario("refundRequest").unwrap_err(),
      ScoringError::UnknownScenario("refundRequest".into())
    );
  }

  #[test]
  fn builtin_is_shared() {
    assert!(std::ptr::eq(ScenarioCatalog::builtin(), ScenarioCatalog::builtin()));
  }

  #[test]
  fn concurrent_reads_match_serial() {
    use crate::scoring::score;

    let cat = ScenarioCatalog::builtin();
    let pairs: Vec<(&str, &str)> = cat
      .scenarios()
      .iter()
      .flat_map(|s| s.choices.iter().map(move |c| (s.id.as_str(), c.key)))
      .collect();
    let serial: Vec<_> = pairs.iter().map(|(id, key)| score(cat, id, key).unwrap()).collect();

    let parallel: Vec<Vec<_>> = std::thread::scope(|scope| {
      let handles: Vec<_> = (0..8)
        .map(|_| {
          scope.spawn(|| {
            pairs.iter().map(|(id, key)| score(cat, id, key).unwrap()).collect::<Vec<_>>()
          })
        })
        .collect();
      handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial.len(), 9);
    for run in parallel {
      assert_eq!(run, serial);
    }
  }

  #[test]
  fn validate_rejects_broken_catalogs() {
    let empty = ScenarioCatalog::new(vec![scenario(ScenarioId::SpecChange, vec![])]);
    assert_eq!(empty.validate(), Err(CatalogError::NoChoices(ScenarioId::SpecChange)));

    let high = ScenarioCatalog::new(vec![scenario(ScenarioId::ScopeCreep, vec![choice("a", 101)])]);
    assert!(matches!(high.validate(), Err(CatalogError::ScoreOutOfRange { score: 101, .. })));

    let dup = ScenarioCatalog::new(vec![scenario(
      ScenarioId::ScopeCreep,
      vec![choice("a", 10), choice("a", 20)],
    )]);
    assert!(matches!(dup.validate(), Err(CatalogError::DuplicateChoice { key: "a", .. })));

    let twice = ScenarioCatalog::new(vec![
      scenario(ScenarioId::ScopeCreep, vec![choice("a", 10)]),
      scenario(ScenarioId::ScopeCreep, vec![choice("b", 10)]),
    ]);
    assert_eq!(twice.validate(), Err(CatalogError::DuplicateScenario(ScenarioId::ScopeCreep)));
  }
}
