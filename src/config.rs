//! Loading simulator configuration (hint prompts) from TOML.
//!
//! See `SimulatorConfig` and `Prompts` for expected schema. Scenario content is
//! compiled in and cannot be changed from here.

use serde::Deserialize;
use tracing::{info, error};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct SimulatorConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompts used by the OpenAI client. Override in TOML to tune tone.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub hint_system: String,
  pub hint_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      hint_system: "You are a helpful coding mentor. Provide Socratic hints to guide learners to the solution without giving the direct answer. Ask guiding questions instead.".into(),
      hint_user_template: "Question: {question}\n\nProvide a Socratic hint to help the learner think through this problem.".into(),
    }
  }
}

pub fn parse_config(s: &str) -> Result<SimulatorConfig, toml::de::Error> {
  toml::from_str::<SimulatorConfig>(s)
}

/// Attempt to load `SimulatorConfig` from SIMULATOR_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<SimulatorConfig> {
  let path = std::env::var("SIMULATOR_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "client_simulator", %path, "Loaded simulator config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "client_simulator", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "client_simulator", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_override_keeps_defaults() {
    let cfg = parse_config("[prompts]\nhint_system = \"Be brief.\"\n").unwrap();
    assert_eq!(cfg.prompts.hint_system, "Be brief.");
    assert_eq!(cfg.prompts.hint_user_template, Prompts::default().hint_user_template);
  }

  #[test]
  fn empty_file_is_default() {
    let cfg = parse_config("").unwrap();
    assert!(cfg.prompts.hint_user_template.contains("{question}"));
  }

  #[test]
  fn malformed_toml_is_rejected() {
    assert!(parse_config("[prompts\nhint_system = 1").is_err());
  }
}
