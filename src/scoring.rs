//! Deterministic verdicts for (scenario, choice) pairs and the score banding.

use tracing::{debug, instrument};

use crate::catalog::ScenarioCatalog;
use crate::domain::{Category, Verdict};
use crate::error::ScoringError;
use crate::seeds::LEARNING_POINTS;

/// Resolve a choice by its stable key. No partial or text matching.
#[instrument(level = "debug", skip_all, fields(%scenario_id, %choice_key))]
pub fn score(catalog: &ScenarioCatalog, scenario_id: &str, choice_key: &str) -> Result<Verdict, ScoringError> {
  let scenario = catalog.get_scenario(scenario_id)?;
  let choice = scenario.choice(choice_key).ok_or_else(|| ScoringError::UnknownChoice {
    scenario: scenario.id,
    choice: choice_key.to_string(),
  })?;
  debug!(target: "simulator", scenario = %scenario.id, key = choice.key, score = choice.score, "Choice scored");
  Ok(Verdict {
    score: choice.score,
    feedback: choice.feedback,
    best_practice: choice.best_practice,
    learning_points: LEARNING_POINTS,
  })
}

/// >= 80 excellent, 60..80 good, below 60 poor.
pub fn categorize(score: u8) -> Category {
  match score {
    80.. => Category::Excellent,
    60..=79 => Category::Good,
    _ => Category::Poor,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ScenarioId;

  fn cat() -> &'static ScenarioCatalog {
    ScenarioCatalog::builtin()
  }

  #[test]
  fn categorize_boundaries() {
    assert_eq!(categorize(79), Category::Good);
    assert_eq!(categorize(80), Category::Excellent);
    assert_eq!(categorize(59), Category::Poor);
    assert_eq!(categorize(60), Category::Good);
    assert_eq!(categorize(0), Category::Poor);
    assert_eq!(categorize(100), Category::Excellent);
  }

  #[test]
  fn accepting_scope_creep_is_dangerous() {
    let v = score(cat(), "scopeCreep", "accept-immediately").unwrap();
    assert_eq!(v.score, 20);
    assert!(v.feedback.contains("危険"));
    assert_eq!(categorize(v.score), Category::Poor);
  }

  #[test]
  fn quoting_scope_creep_is_excellent() {
    let v = score(cat(), "scopeCreep", "quote-and-extend").unwrap();
    assert_eq!(v.score, 95);
    assert_eq!(categorize(v.score), Category::Excellent);
    assert!(v.best_practice.contains("見積もる"));
  }

  #[test]
  fn partial_payment_request_is_excellent() {
    let v = score(cat(), "paymentDelay", "confirm-then-50percent").unwrap();
    assert_eq!(v.score, 85);
    assert_eq!(categorize(v.score), Category::Excellent);
  }

  #[test]
  fn spec_change_choices() {
    assert_eq!(score(cat(), "specChange", "cite-approval").unwrap().score, 90);
    assert_eq!(score(cat(), "specChange", "quote-change-fee").unwrap().score, 85);
    assert_eq!(score(cat(), "specChange", "accept-all-changes").unwrap().score, 20);
  }

  #[test]
  fn scoring_is_deterministic() {
    for s in cat().scenarios() {
      for c in &s.choices {
        let a = score(cat(), s.id.as_str(), c.key).unwrap();
        let b = score(cat(), s.id.as_str(), c.key).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.score, c.score);
      }
    }
  }

  #[test]
  fn learning_points_are_generic() {
    let a = score(cat(), "scopeCreep", "prioritize-partial").unwrap();
    let b = score(cat(), "specChange", "cite-approval").unwrap();
    assert_eq!(a.learning_points, b.learning_points);
    assert_eq!(a.learning_points[1], "契約書と見積もりを明確にする");
  }

  #[test]
  fn unknown_choice_never_scores() {
    for id in ScenarioId::ALL {
      let err = score(cat(), id.as_str(), "ignore-the-email").unwrap_err();
      assert_eq!(err, ScoringError::UnknownChoice { scenario: id, choice: "ignore-the-email".into() });
    }
    // display text is not a key
    let text = cat().get(ScenarioId::ScopeCreep).unwrap().choices[0].text;
    assert!(matches!(score(cat(), "scopeCreep", text), Err(ScoringError::UnknownChoice { .. })));
  }

  #[test]
  fn unknown_scenario_fails_first() {
    for key in ["accept-immediately", "", "nothing"] {
      assert_eq!(score(cat(), "lateDelivery", key).unwrap_err().code(), "UnknownScenario");
    }
  }
}
