use std::time::Duration;

use serde::Deserialize;

use crate::coin::minter::MinterClient;
use crate::types::ApiResult;

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";
pub const ENV_PREFIX: &str = "MINTER"; // e.g. MINTER_NODE__API=http://node:8841

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
  #[serde(default)]
  pub node: NodeSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NodeSettings {
  #[serde(default = "default_api")]
  pub api: String,
  #[serde(default)]
  pub timeout_secs: Option<u64>,
}

impl Default for NodeSettings {
  fn default() -> Self {
    Self {
      api: default_api(),
      timeout_secs: None,
    }
  }
}

fn default_api() -> String {
  "http://localhost:8841".to_string()
}

impl Settings {
  /// Loads `./config.toml` if present, then environment overrides.
  pub fn new() -> ApiResult<Self> {
    Self::from_path(DEFAULT_CONFIG_PATH)
  }

  pub fn from_path(path: &str) -> ApiResult<Self> {
    let builder = config::Config::builder()
      .add_source(config::File::with_name(path).required(false))
      // MINTER_NODE__API=http://... overrides the file value
      .add_source(config::Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"));

    Ok(builder.build()?.try_deserialize()?)
  }
}

impl NodeSettings {
  pub fn build_client(&self) -> ApiResult<MinterClient> {
    match self.timeout_secs {
      Some(secs) => MinterClient::with_timeout(self.api.clone(), Duration::from_secs(secs)),
      None => Ok(MinterClient::new(self.api.clone())),
    }
  }
}
