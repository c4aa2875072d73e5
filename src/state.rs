//! Application state: the scenario catalog, prompts, and the optional OpenAI client.
//!
//! The catalog is the process-wide `&'static` registry, so handlers read it
//! without any locking. There is no mutable shared state.

use tracing::{info, instrument};

use crate::catalog::ScenarioCatalog;
use crate::config::{load_config_from_env, Prompts};
use crate::error::CatalogError;
use crate::openai::OpenAI;

#[derive(Clone)]
pub struct AppState {
  pub catalog: &'static ScenarioCatalog,
  pub openai: Option<OpenAI>,
  pub prompts: Prompts,
}

impl AppState {
  /// Build state from env: load config, validate the catalog, init OpenAI.
  #[instrument(level = "info", skip_all)]
  pub fn from_env() -> Result<Self, CatalogError> {
    let prompts = load_config_from_env().map(|c| c.prompts).unwrap_or_default();

    let openai = OpenAI::from_env();
    if let Some(oa) = &openai {
      info!(target: "client_simulator", base_url = %oa.base_url, fast_model = %oa.fast_model, "OpenAI enabled.");
    } else {
      info!(target: "client_simulator", "OpenAI disabled (no OPENAI_API_KEY). Using local hint fallback.");
    }

    Self::with_parts(ScenarioCatalog::builtin(), openai, prompts)
  }

  pub fn with_parts(
    catalog: &'static ScenarioCatalog,
    openai: Option<OpenAI>,
    prompts: Prompts,
  ) -> Result<Self, CatalogError> {
    catalog.validate()?;
    info!(target: "simulator", scenarios = catalog.scenarios().len(), "Scenario catalog ready");
    Ok(Self { catalog, openai, prompts })
  }

  /// Offline state over the built-in catalog (no hint service).
  #[cfg(test)]
  pub fn for_tests() -> Self {
    Self::with_parts(ScenarioCatalog::builtin(), None, Prompts::default())
      .expect("built-in catalog is valid")
  }
}
