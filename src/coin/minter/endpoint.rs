/**
* filename : endpoint
* date: 2025. 4. 8.
* description: request targets of the Minter node API
**/

/// A single node request. `target()` renders path and query with the
/// arguments substituted as-is; callers pre-encode anything that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
  Status,
  Block { height: u64 },
  Events { height: u64 },
  Validators { height: u64 },
  Candidate { pub_key: &'a str, height: u64 },
  Candidates { height: u64, include_stakes: bool },
  CoinInfo { symbol: &'a str },
  Address { address: &'a str },
  Addresses { addresses: &'a [String], height: u64 },
  EstimateTx { tx: &'a str },
  EstimateCoinBuy { coin_to_sell: &'a str, coin_to_buy: &'a str, value_to_buy: &'a str },
  EstimateCoinSell { coin_to_sell: &'a str, coin_to_buy: &'a str, value_to_sell: &'a str },
  EstimateCoinSellAll {
    coin_to_sell: &'a str,
    coin_to_buy: &'a str,
    value_to_sell: &'a str,
    gas_price: &'a str,
  },
  MinGasPrice,
  SendTransaction { tx: &'a str },
}

impl Endpoint<'_> {
  pub fn target(&self) -> String {
    match self {
      Endpoint::Status => "/status".to_string(),
      Endpoint::Block { height } => format!("/block?height={}", height),
      Endpoint::Events { height } => format!("/events?height={}", height),
      Endpoint::Validators { height } => format!("/validators?height={}", height),
      Endpoint::Candidate { pub_key, height } => {
        format!("/candidate?pubkey={}&height={}", pub_key, height)
      }
      Endpoint::Candidates { height, include_stakes } => {
        let mut target = format!("/candidates?height={}", height);
        if *include_stakes {
          target.push_str("&include_stakes=true");
        }
        target
      }
      Endpoint::CoinInfo { symbol } => format!("/coin_info?symbol={}", symbol),
      Endpoint::Address { address } => format!("/address?address={}", title_case(address)),
      Endpoint::Addresses { addresses, height } => {
        format!("/addresses?addresses=[{}]&height={}", addresses.join(","), height)
      }
      Endpoint::EstimateTx { tx } => format!("/estimate_tx_commission?tx={}", tx),
      Endpoint::EstimateCoinBuy { coin_to_sell, coin_to_buy, value_to_buy } => format!(
        "/estimate_coin_buy?coin_to_sell={}&coin_to_buy={}&value_to_buy={}",
        coin_to_sell, coin_to_buy, value_to_buy
      ),
      Endpoint::EstimateCoinSell { coin_to_sell, coin_to_buy, value_to_sell } => format!(
        "/estimate_coin_sell?coin_to_sell={}&coin_to_buy={}&value_to_sell={}",
        coin_to_sell, coin_to_buy, value_to_sell
      ),
      Endpoint::EstimateCoinSellAll { coin_to_sell, coin_to_buy, value_to_sell, gas_price } => format!(
        "/estimate_coin_sell_all?coin_to_sell={}&coin_to_buy={}&value_to_sell={}&gas_price={}",
        coin_to_sell, coin_to_buy, value_to_sell, gas_price
      ),
      Endpoint::MinGasPrice => "/min_gas_price".to_string(),
      Endpoint::SendTransaction { tx } => format!("/send_transaction?tx=0x{}", tx),
    }
  }
}

/// Legacy address transform: upper-case every letter that starts a word.
/// Word characters are ASCII alphanumerics, `_`, and non-ASCII letters or
/// digits; anything else ASCII, and non-ASCII whitespace, separates words.
pub fn title_case(input: &str) -> String {
  let mut prev = ' ';
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    if is_separator(prev) {
      out.push(to_title(c));
    } else {
      out.push(c);
    }
    prev = c;
  }
  out
}

/// Single-character titlecase mapping. Digraphs take their title form
/// (`ǆ` -> `ǅ`); characters without a one-to-one upper form stay as they are
/// (`ß`), except the Greek letters with ypogegrammeni that map to prosgegrammeni.
fn to_title(c: char) -> char {
  match c {
    '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
    '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
    '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
    '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
    '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
      char::from_u32(c as u32 + 8).unwrap_or(c)
    }
    '\u{1FB3}' => '\u{1FBC}',
    '\u{1FC3}' => '\u{1FCC}',
    '\u{1FF3}' => '\u{1FFC}',
    _ => {
      let mut upper = c.to_uppercase();
      match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
      }
    }
  }
}

fn is_separator(c: char) -> bool {
  if c.is_ascii() {
    return !(c.is_ascii_alphanumeric() || c == '_');
  }
  if c.is_alphabetic() || c.is_numeric() {
    return false;
  }
  c.is_whitespace()
}
