/**
* filename : transaction
* date: 2025. 4. 8.
* description: Minter transaction types and their data payloads
**/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coin::minter::model::{string_or_number, strings_or_numbers};

/// Transaction type tags as sent by the node in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
  Send = 1,
  SellCoin = 2,
  SellAllCoin = 3,
  BuyCoin = 4,
  CreateCoin = 5,
  DeclareCandidacy = 6,
  Delegate = 7,
  Unbond = 8,
  RedeemCheck = 9,
  SetCandidateOnline = 10,
  SetCandidateOffline = 11,
  CreateMultisig = 12,
  MultiSend = 13,
  EditCandidate = 14,
}

impl TransactionType {
  pub const ALL: [TransactionType; 14] = [
    TransactionType::Send,
    TransactionType::SellCoin,
    TransactionType::SellAllCoin,
    TransactionType::BuyCoin,
    TransactionType::CreateCoin,
    TransactionType::DeclareCandidacy,
    TransactionType::Delegate,
    TransactionType::Unbond,
    TransactionType::RedeemCheck,
    TransactionType::SetCandidateOnline,
    TransactionType::SetCandidateOffline,
    TransactionType::CreateMultisig,
    TransactionType::MultiSend,
    TransactionType::EditCandidate,
  ];

  pub fn from_tag(tag: u8) -> Option<Self> {
    Self::ALL.iter().copied().find(|t| t.tag() == tag)
  }

  pub fn tag(self) -> u8 {
    self as u8
  }
}

// Absent payload fields are left empty; numeric amounts keep their decimal
// string form.

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SendTxData {
  pub coin: String,
  pub to: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SellCoinTxData {
  pub coin_to_sell: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value_to_sell: String,
  pub coin_to_buy: String,
  #[serde(deserialize_with = "string_or_number")]
  pub minimum_value_to_buy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SellAllCoinTxData {
  pub coin_to_sell: String,
  pub coin_to_buy: String,
  #[serde(deserialize_with = "string_or_number")]
  pub minimum_value_to_buy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuyCoinTxData {
  pub coin_to_buy: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value_to_buy: String,
  pub coin_to_sell: String,
  #[serde(deserialize_with = "string_or_number")]
  pub maximum_value_to_sell: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateCoinTxData {
  pub name: String,
  pub symbol: String,
  #[serde(deserialize_with = "string_or_number")]
  pub initial_amount: String,
  #[serde(deserialize_with = "string_or_number")]
  pub initial_reserve: String,
  #[serde(deserialize_with = "string_or_number")]
  pub constant_reserve_ratio: String,
  pub max_supply: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeclareCandidacyTxData {
  pub address: String,
  pub pub_key: String,
  #[serde(deserialize_with = "string_or_number")]
  pub commission: String,
  pub coin: String,
  #[serde(deserialize_with = "string_or_number")]
  pub stake: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DelegateTxData {
  pub pub_key: String,
  pub coin: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UnbondTxData {
  pub pub_key: String,
  pub coin: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckData {
  pub coin: String,
  #[serde(deserialize_with = "string_or_number")]
  pub nonce: String,
  #[serde(deserialize_with = "string_or_number")]
  pub value: String,
  pub sender: String,
  #[serde(deserialize_with = "string_or_number")]
  pub due_block: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RedeemCheckTxData {
  pub raw_check: String,
  pub proof: String,
  pub check: Option<CheckData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetCandidateTxData {
  pub pub_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateMultisigTxData {
  #[serde(deserialize_with = "string_or_number")]
  pub threshold: String,
  #[serde(deserialize_with = "strings_or_numbers")]
  pub weights: Vec<String>,
  pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MultiSendTxData {
  pub list: Vec<SendTxData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditCandidateTxData {
  pub pub_key: String,
  pub reward_address: String,
  pub owner_address: String,
}

/// Decoded `data` of a transaction. Each variant belongs to exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TransactionData {
  Send(SendTxData),
  SellCoin(SellCoinTxData),
  SellAllCoin(SellAllCoinTxData),
  BuyCoin(BuyCoinTxData),
  CreateCoin(CreateCoinTxData),
  DeclareCandidacy(DeclareCandidacyTxData),
  Delegate(DelegateTxData),
  Unbond(UnbondTxData),
  RedeemCheck(RedeemCheckTxData),
  SetCandidateOnline(SetCandidateTxData),
  SetCandidateOffline(SetCandidateTxData),
  CreateMultisig(CreateMultisigTxData),
  MultiSend(MultiSendTxData),
  EditCandidate(EditCandidateTxData),
}

impl TransactionData {
  pub fn decode(tx_type: TransactionType, raw: &Value) -> Result<Self, serde_json::Error> {
    use TransactionType as T;

    Ok(match tx_type {
      T::Send => Self::Send(parse(raw)?),
      T::SellCoin => Self::SellCoin(parse(raw)?),
      T::SellAllCoin => Self::SellAllCoin(parse(raw)?),
      T::BuyCoin => Self::BuyCoin(parse(raw)?),
      T::CreateCoin => Self::CreateCoin(parse(raw)?),
      T::DeclareCandidacy => Self::DeclareCandidacy(parse(raw)?),
      T::Delegate => Self::Delegate(parse(raw)?),
      T::Unbond => Self::Unbond(parse(raw)?),
      T::RedeemCheck => Self::RedeemCheck(parse(raw)?),
      T::SetCandidateOnline => Self::SetCandidateOnline(parse(raw)?),
      T::SetCandidateOffline => Self::SetCandidateOffline(parse(raw)?),
      T::CreateMultisig => Self::CreateMultisig(parse(raw)?),
      T::MultiSend => Self::MultiSend(parse(raw)?),
      T::EditCandidate => Self::EditCandidate(parse(raw)?),
    })
  }

  /// Empty payload of the variant that belongs to `tx_type`.
  pub fn empty(tx_type: TransactionType) -> Self {
    use TransactionType as T;

    match tx_type {
      T::Send => Self::Send(Default::default()),
      T::SellCoin => Self::SellCoin(Default::default()),
      T::SellAllCoin => Self::SellAllCoin(Default::default()),
      T::BuyCoin => Self::BuyCoin(Default::default()),
      T::CreateCoin => Self::CreateCoin(Default::default()),
      T::DeclareCandidacy => Self::DeclareCandidacy(Default::default()),
      T::Delegate => Self::Delegate(Default::default()),
      T::Unbond => Self::Unbond(Default::default()),
      T::RedeemCheck => Self::RedeemCheck(Default::default()),
      T::SetCandidateOnline => Self::SetCandidateOnline(Default::default()),
      T::SetCandidateOffline => Self::SetCandidateOffline(Default::default()),
      T::CreateMultisig => Self::CreateMultisig(Default::default()),
      T::MultiSend => Self::MultiSend(Default::default()),
      T::EditCandidate => Self::EditCandidate(Default::default()),
    }
  }

  pub fn tx_type(&self) -> TransactionType {
    match self {
      Self::Send(_) => TransactionType::Send,
      Self::SellCoin(_) => TransactionType::SellCoin,
      Self::SellAllCoin(_) => TransactionType::SellAllCoin,
      Self::BuyCoin(_) => TransactionType::BuyCoin,
      Self::CreateCoin(_) => TransactionType::CreateCoin,
      Self::DeclareCandidacy(_) => TransactionType::DeclareCandidacy,
      Self::Delegate(_) => TransactionType::Delegate,
      Self::Unbond(_) => TransactionType::Unbond,
      Self::RedeemCheck(_) => TransactionType::RedeemCheck,
      Self::SetCandidateOnline(_) => TransactionType::SetCandidateOnline,
      Self::SetCandidateOffline(_) => TransactionType::SetCandidateOffline,
      Self::CreateMultisig(_) => TransactionType::CreateMultisig,
      Self::MultiSend(_) => TransactionType::MultiSend,
      Self::EditCandidate(_) => TransactionType::EditCandidate,
    }
  }
}

fn parse<T: DeserializeOwned>(raw: &Value) -> Result<T, serde_json::Error> {
  T::deserialize(raw)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn sample(tx_type: TransactionType) -> Value {
    use TransactionType as T;
    match tx_type {
      T::Send => json!({"coin": "MNT", "to": "Mxaa", "value": "10"}),
      T::SellCoin => json!({
        "coin_to_sell": "MNT", "value_to_sell": "10", "coin_to_buy": "BIP", "minimum_value_to_buy": "1"
      }),
      T::SellAllCoin => json!({"coin_to_sell": "MNT", "coin_to_buy": "BIP", "minimum_value_to_buy": "1"}),
      T::BuyCoin => json!({
        "coin_to_buy": "BIP", "value_to_buy": "5", "coin_to_sell": "MNT", "maximum_value_to_sell": "50"
      }),
      T::CreateCoin => json!({
        "name": "Test", "symbol": "TST", "initial_amount": "100", "initial_reserve": "10000",
        "constant_reserve_ratio": 50
      }),
      T::DeclareCandidacy => json!({
        "address": "Mxaa", "pub_key": "Mp01", "commission": "10", "coin": "MNT", "stake": "5"
      }),
      T::Delegate | T::Unbond => json!({"pub_key": "Mp01", "coin": "MNT", "value": "3"}),
      T::RedeemCheck => json!({"raw_check": "Mcf8ab", "proof": "0x01"}),
      T::SetCandidateOnline | T::SetCandidateOffline => json!({"pub_key": "Mp01"}),
      T::CreateMultisig => json!({"threshold": "2", "weights": ["1", "1"], "addresses": ["Mxaa", "Mxbb"]}),
      T::MultiSend => json!({"list": [{"coin": "MNT", "to": "Mxaa", "value": "1"}]}),
      T::EditCandidate => json!({"pub_key": "Mp01", "reward_address": "Mxaa", "owner_address": "Mxbb"}),
    }
  }

  #[test]
  fn tags_round_trip_through_from_tag() {
    for (i, t) in TransactionType::ALL.iter().enumerate() {
      assert_eq!(t.tag() as usize, i + 1);
      assert_eq!(TransactionType::from_tag(t.tag()), Some(*t));
    }
    assert_eq!(TransactionType::from_tag(0), None);
    assert_eq!(TransactionType::from_tag(15), None);
  }

  #[test]
  fn every_tag_decodes_into_its_own_variant() {
    for t in TransactionType::ALL {
      let data = TransactionData::decode(t, &sample(t)).expect("sample should decode");
      assert_eq!(data.tx_type(), t);
    }
  }

  #[test]
  fn decoded_fields_are_carried_over() {
    let data = TransactionData::decode(TransactionType::Send, &sample(TransactionType::Send)).unwrap();
    assert_eq!(
      data,
      TransactionData::Send(SendTxData { coin: "MNT".into(), to: "Mxaa".into(), value: "10".into() })
    );

    let data = TransactionData::decode(TransactionType::CreateCoin, &sample(TransactionType::CreateCoin)).unwrap();
    match data {
      TransactionData::CreateCoin(coin) => {
        assert_eq!(coin.symbol, "TST");
        assert_eq!(coin.constant_reserve_ratio, "50");
        assert_eq!(coin.max_supply, None);
      }
      other => panic!("unexpected variant {:?}", other),
    }

    let data = TransactionData::decode(TransactionType::MultiSend, &sample(TransactionType::MultiSend)).unwrap();
    match data {
      TransactionData::MultiSend(multi) => assert_eq!(multi.list[0].to, "Mxaa"),
      other => panic!("unexpected variant {:?}", other),
    }
  }

  #[test]
  fn online_and_offline_share_shape_but_not_variant() {
    let raw = json!({"pub_key": "Mp01"});
    let online = TransactionData::decode(TransactionType::SetCandidateOnline, &raw).unwrap();
    let offline = TransactionData::decode(TransactionType::SetCandidateOffline, &raw).unwrap();
    assert_ne!(online, offline);
    assert_eq!(offline.tx_type(), TransactionType::SetCandidateOffline);
  }

  #[test]
  fn missing_fields_are_left_empty() {
    let data = TransactionData::decode(TransactionType::Send, &json!({"coin": "MNT", "to": "Mxb"})).unwrap();
    assert_eq!(
      data,
      TransactionData::Send(SendTxData { coin: "MNT".into(), to: "Mxb".into(), value: String::new() })
    );

    let data = TransactionData::decode(TransactionType::EditCandidate, &json!({})).unwrap();
    assert_eq!(data, TransactionData::empty(TransactionType::EditCandidate));
  }

  #[test]
  fn numeric_amounts_become_strings() {
    let raw = json!({"threshold": 2, "weights": [1, "1"], "addresses": ["Mxaa", "Mxbb"]});
    match TransactionData::decode(TransactionType::CreateMultisig, &raw).unwrap() {
      TransactionData::CreateMultisig(multisig) => {
        assert_eq!(multisig.threshold, "2");
        assert_eq!(multisig.weights, vec!["1".to_string(), "1".to_string()]);
        assert_eq!(multisig.addresses.len(), 2);
      }
      other => panic!("unexpected variant {:?}", other),
    }

    let raw = json!({"pub_key": "Mp01", "coin": "MNT", "value": 5, "extra": null});
    match TransactionData::decode(TransactionType::Delegate, &raw).unwrap() {
      TransactionData::Delegate(delegate) => assert_eq!(delegate.value, "5"),
      other => panic!("unexpected variant {:?}", other),
    }
  }

  #[test]
  fn null_amount_is_empty() {
    let raw = json!({"coin": "MNT", "to": "Mxb", "value": null});
    match TransactionData::decode(TransactionType::Send, &raw).unwrap() {
      TransactionData::Send(send) => assert_eq!(send.value, ""),
      other => panic!("unexpected variant {:?}", other),
    }
  }

  #[test]
  fn non_object_payload_is_still_an_error() {
    assert!(TransactionData::decode(TransactionType::Send, &json!("oops")).is_err());
    assert!(TransactionData::decode(TransactionType::MultiSend, &json!({"list": 3})).is_err());
  }

  #[test]
  fn empty_payload_matches_every_tag() {
    for t in TransactionType::ALL {
      assert_eq!(TransactionData::empty(t).tx_type(), t);
    }
  }
}
