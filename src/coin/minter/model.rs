/**
* filename : model
* date: 2025. 4. 7.
* description: response envelopes of the Minter node API
**/

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coin::minter::transaction::{TransactionData, TransactionType};
use crate::types::{ApiError, ApiResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
  Str(String),
  Num(serde_json::Number),
}

impl From<StringOrNumber> for String {
  fn from(raw: StringOrNumber) -> Self {
    match raw {
      StringOrNumber::Str(s) => s,
      StringOrNumber::Num(n) => n.to_string(),
    }
  }
}

/// Accepts a JSON string, number or null and keeps it as a string (null is
/// empty). Older node versions emit some counters as numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from).unwrap_or_default())
}

/// List form of `string_or_number`.
pub fn strings_or_numbers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<Vec<StringOrNumber>>::deserialize(deserializer)?;
  Ok(raw.unwrap_or_default().into_iter().map(String::from).collect())
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NodeResponse<T> {
  #[serde(default)]
  pub jsonrpc: Option<String>,
  #[serde(default)]
  pub id: Option<Value>,
  pub result: Option<T>,
  #[serde(default)]
  pub error: Option<NodeError>,
}

impl<T> NodeResponse<T> {
  pub fn into_result(self) -> ApiResult<T> {
    match (self.result, self.error) {
      (_, Some(error)) => Err(ApiError::Node { code: error.code, message: error.message }),
      (Some(result), None) => Ok(result),
      (None, None) => Err(ApiError::EmptyResponse),
    }
  }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NodeError {
  pub code: i64,
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub data: Option<String>,
  #[serde(default)]
  pub tx_result: Option<Value>,
}

pub type StatusResponse = NodeResponse<StatusResult>;
pub type BlockResponse = NodeResponse<BlockResult>;
pub type EventsResponse = NodeResponse<EventsResult>;
pub type ValidatorsResponse = NodeResponse<Vec<Validator>>;
pub type CandidateResponse = NodeResponse<Candidate>;
pub type CandidatesResponse = NodeResponse<Vec<Candidate>>;
pub type CoinInfoResponse = NodeResponse<CoinInfo>;
pub type AddressResponse = NodeResponse<AddressResult>;
pub type BalancesResponse = NodeResponse<Vec<AddressBalance>>;
pub type EstimateTxResponse = NodeResponse<EstimateTxResult>;
pub type EstimateCoinBuyResponse = NodeResponse<EstimateCoinBuyResult>;
pub type EstimateCoinSellResponse = NodeResponse<EstimateCoinSellResult>;
pub type EstimateCoinSellAllResponse = NodeResponse<EstimateCoinSellAllResult>;
pub type GasResponse = NodeResponse<String>;
pub type SendTransactionResponse = NodeResponse<SendTransactionResult>;

// ====== status ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StatusResult {
  pub version: String,
  pub latest_block_hash: String,
  pub latest_app_hash: String,
  #[serde(deserialize_with = "string_or_number")]
  pub latest_block_height: String,
  pub latest_block_time: String,
  pub keep_last_states: Option<String>,
  pub tm_status: Option<Value>,
}

// ====== block ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BlockResult {
  pub hash: String,
  #[serde(deserialize_with = "string_or_number")]
  pub height: String,
  pub time: String,
  #[serde(rename = "num_txs", deserialize_with = "string_or_number")]
  pub tx_count: String,
  pub total_txs: Option<String>,
  pub transactions: Vec<Transaction>,
  pub block_reward: Option<String>,
  pub size: Option<String>,
  pub proposer: Option<String>,
  pub validators: Vec<BlockValidator>,
  pub evidence: Option<Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BlockValidator {
  pub pub_key: String,
  pub signed: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Transaction {
  pub hash: String,
  pub raw_tx: String,
  pub from: String,
  #[serde(deserialize_with = "string_or_number")]
  pub nonce: String,
  #[serde(deserialize_with = "string_or_number")]
  pub gas_price: String,
  #[serde(rename = "type")]
  pub tx_type: u8,
  #[serde(rename = "data")]
  pub raw_data: Value,
  pub payload: String,
  pub service_data: String,
  #[serde(deserialize_with = "string_or_number")]
  pub gas: String,
  pub gas_coin: String,
  pub tags: HashMap<String, String>,
  pub log: Option<String>,
  /// Typed view of `raw_data`, filled in by the block call. Serialized as
  /// `decoded` next to the raw `data`.
  #[serde(rename = "decoded", skip_deserializing, skip_serializing_if = "Option::is_none")]
  pub data: Option<TransactionData>,
}

impl Transaction {
  /// `None` for tags outside the known set.
  pub fn kind(&self) -> Option<TransactionType> {
    TransactionType::from_tag(self.tx_type)
  }
}

// ====== events ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EventsResult {
  pub events: Vec<Event>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Event {
  #[serde(rename = "type")]
  pub event_type: String,
  pub value: EventValue,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EventValue {
  pub role: Option<String>,
  pub address: String,
  pub amount: String,
  pub coin: Option<String>,
  pub validator_pub_key: String,
}

// ====== validators / candidates ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Validator {
  pub pub_key: String,
  #[serde(deserialize_with = "string_or_number")]
  pub voting_power: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Candidate {
  pub reward_address: String,
  pub owner_address: String,
  pub total_stake: String,
  pub pub_key: String,
  #[serde(deserialize_with = "string_or_number")]
  pub commission: String,
  pub stakes: Vec<Stake>,
  #[serde(deserialize_with = "string_or_number")]
  pub created_at_block: String,
  pub status: u8,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Stake {
  pub owner: String,
  pub coin: String,
  pub value: String,
  pub bip_value: String,
}

// ====== coins / addresses ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CoinInfo {
  pub name: String,
  pub symbol: String,
  pub volume: String,
  #[serde(deserialize_with = "string_or_number")]
  pub crr: String,
  pub reserve_balance: String,
  pub max_supply: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AddressResult {
  pub balance: HashMap<String, String>,
  #[serde(deserialize_with = "string_or_number")]
  pub transaction_count: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AddressBalance {
  pub address: String,
  pub balance: HashMap<String, String>,
  #[serde(deserialize_with = "string_or_number")]
  pub transaction_count: String,
}

// ====== estimates / send ======

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EstimateTxResult {
  pub commission: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EstimateCoinBuyResult {
  pub will_pay: String,
  pub commission: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EstimateCoinSellResult {
  pub will_get: String,
  pub commission: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EstimateCoinSellAllResult {
  pub will_get: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SendTransactionResult {
  pub code: i64,
  pub data: String,
  pub log: String,
  pub hash: String,
}
