/**
* filename : client
* date: 2025. 4. 8.
* description: Minter node HTTP API client
**/

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use crate::coin::coin_trait::BlockchainClient;
use crate::coin::minter::endpoint::Endpoint;
use crate::coin::minter::model::*;
use crate::coin::minter::transaction::TransactionData;
use crate::types::ApiResult;

/// One GET per call, no retries. The link can be swapped between calls
/// through `set_link`, which needs exclusive access to the client.
#[derive(Clone)]
pub struct MinterClient {
  client: Client,
  api_url: String,
}

impl MinterClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }

  pub fn with_client(client: Client, api_url: String) -> Self {
    Self { client, api_url }
  }

  pub fn with_timeout(api_url: String, timeout: Duration) -> ApiResult<Self> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client, api_url })
  }

  pub fn link(&self) -> &str {
    &self.api_url
  }

  pub fn set_link(&mut self, api_url: String) {
    self.api_url = api_url;
  }

  async fn call<T>(&self, endpoint: Endpoint<'_>) -> ApiResult<T>
  where
    T: serde::de::DeserializeOwned + Send,
  {
    self.fetch_json(&endpoint.target()).await
  }

  pub async fn get_status(&self) -> ApiResult<StatusResponse> {
    self.call(Endpoint::Status).await
  }

  /// Fetches a block and decodes each transaction's `data` by its type tag.
  /// Every record with a known tag gets the variant of that tag; a payload
  /// that cannot be read at all yields the empty variant and a warning.
  /// Unknown tags keep `data == None`. Only a broken envelope fails the call.
  pub async fn get_block(&self, height: u64) -> ApiResult<BlockResponse> {
    let mut response: BlockResponse = self.call(Endpoint::Block { height }).await?;
    if let Some(block) = response.result.as_mut() {
      decode_transactions(block);
    }
    Ok(response)
  }

  pub async fn get_block_events(&self, height: u64) -> ApiResult<EventsResponse> {
    self.call(Endpoint::Events { height }).await
  }

  pub async fn get_block_validators(&self, height: u64) -> ApiResult<ValidatorsResponse> {
    self.call(Endpoint::Validators { height }).await
  }

  pub async fn get_candidate(&self, pub_key: &str, height: u64) -> ApiResult<CandidateResponse> {
    self.call(Endpoint::Candidate { pub_key, height }).await
  }

  pub async fn get_candidates(&self, height: u64, include_stakes: bool) -> ApiResult<CandidatesResponse> {
    self.call(Endpoint::Candidates { height, include_stakes }).await
  }

  pub async fn get_coin_info(&self, symbol: &str) -> ApiResult<CoinInfoResponse> {
    self.call(Endpoint::CoinInfo { symbol }).await
  }

  /// The address is title-cased before it is sent (see `endpoint::title_case`).
  pub async fn get_address(&self, address: &str) -> ApiResult<AddressResponse> {
    self.call(Endpoint::Address { address }).await
  }

  pub async fn get_addresses(&self, addresses: &[String], height: u64) -> ApiResult<BalancesResponse> {
    self.call(Endpoint::Addresses { addresses, height }).await
  }

  pub async fn get_estimate_tx(&self, tx: &str) -> ApiResult<EstimateTxResponse> {
    self.call(Endpoint::EstimateTx { tx }).await
  }

  pub async fn get_estimate_coin_buy(
    &self,
    coin_to_sell: &str,
    coin_to_buy: &str,
    value_to_buy: &str,
  ) -> ApiResult<EstimateCoinBuyResponse> {
    self.call(Endpoint::EstimateCoinBuy { coin_to_sell, coin_to_buy, value_to_buy }).await
  }

  pub async fn get_estimate_coin_sell(
    &self,
    coin_to_sell: &str,
    coin_to_buy: &str,
    value_to_sell: &str,
  ) -> ApiResult<EstimateCoinSellResponse> {
    self.call(Endpoint::EstimateCoinSell { coin_to_sell, coin_to_buy, value_to_sell }).await
  }

  pub async fn get_estimate_coin_sell_all(
    &self,
    coin_to_sell: &str,
    coin_to_buy: &str,
    value_to_sell: &str,
    gas_price: &str,
  ) -> ApiResult<EstimateCoinSellAllResponse> {
    self.call(Endpoint::EstimateCoinSellAll { coin_to_sell, coin_to_buy, value_to_sell, gas_price })
      .await
  }

  pub async fn get_min_gas_price(&self) -> ApiResult<GasResponse> {
    self.call(Endpoint::MinGasPrice).await
  }

  /// `tx` is the hex-encoded signed transaction without the `0x` prefix.
  pub async fn push_transaction(&self, tx: &str) -> ApiResult<SendTransactionResponse> {
    self.call(Endpoint::SendTransaction { tx }).await
  }
}

pub(crate) fn decode_transactions(block: &mut BlockResult) {
  if block.tx_count == "0" {
    return;
  }

  for tx in block.transactions.iter_mut() {
    let Some(kind) = tx.kind() else {
      continue;
    };
    let data = TransactionData::decode(kind, &tx.raw_data).unwrap_or_else(|e| {
      warn!(
        "[MINTER] block {} tx {}: could not decode {:?} data: {}",
        block.height, tx.hash, kind, e
      );
      TransactionData::empty(kind)
    });
    tx.data = Some(data);
  }
}

#[async_trait]
impl BlockchainClient for MinterClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }
}
