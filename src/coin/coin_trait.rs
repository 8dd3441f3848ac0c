/**
* filename : coin_trait
* date: 2025. 4. 7.
* description: shared GET + JSON decode step for node clients
**/

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::ApiResult;

#[async_trait]
pub trait BlockchainClient: Clone + Send + Sync {
  fn get_http_client(&self) -> &Client;
  fn get_api_url(&self) -> &str;

  /// Base URL joined with `target` by plain concatenation.
  fn url_for(&self, target: &str) -> String {
    format!("{}{}", self.get_api_url(), target)
  }

  /// One GET against `url_for(target)`. The HTTP status is not inspected;
  /// the node reports failures inside the JSON body.
  async fn fetch_json<T>(&self, target: &str) -> ApiResult<T>
  where
    T: DeserializeOwned + Send,
  {
    let url = self.url_for(target);
    debug!("GET {}", url);

    let body = self.get_http_client()
      .get(&url)
      .send()
      .await?
      .text()
      .await?;
    debug!("Raw node response: {}", body);

    Ok(serde_json::from_str(&body)?)
  }
}
