/**
* date: 2025. 4. 8.
* description: command line access to a Minter node
**/

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use minter_node_api::config::Settings;
use minter_node_api::MinterClient;

#[derive(Parser, Debug)]
#[command(name = "minter-node", about = "Query a Minter full node over its HTTP API")]
struct Cli {
  /// Config file (TOML); missing file is fine
  #[arg(long, default_value = minter_node_api::config::DEFAULT_CONFIG_PATH)]
  config: String,

  /// Overrides node.api from the config
  #[arg(long)]
  link: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  Status,
  Block { height: u64 },
  Events { height: u64 },
  Validators { height: u64 },
  Candidate { pub_key: String, height: u64 },
  Candidates {
    height: u64,
    #[arg(long)]
    include_stakes: bool,
  },
  CoinInfo { symbol: String },
  Address { address: String },
  Addresses {
    #[arg(long)]
    height: u64,
    #[arg(required = true)]
    addresses: Vec<String>,
  },
  EstimateTx { tx: String },
  EstimateCoinBuy { coin_to_sell: String, coin_to_buy: String, value_to_buy: String },
  EstimateCoinSell { coin_to_sell: String, coin_to_buy: String, value_to_sell: String },
  EstimateCoinSellAll {
    coin_to_sell: String,
    coin_to_buy: String,
    value_to_sell: String,
    gas_price: String,
  },
  MinGasPrice,
  SendTransaction { tx: String },
}

fn print<T: Serialize>(value: &T) -> eyre::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();
  let mut settings = Settings::from_path(&cli.config)?;
  if let Some(link) = cli.link {
    settings.node.api = link;
  }
  info!("Using node {}", settings.node.api);

  let client: MinterClient = settings.node.build_client()?;

  match cli.command {
    Command::Status => print(&client.get_status().await?),
    Command::Block { height } => {
      let response = client.get_block(height).await?;
      if let Some(block) = &response.result {
        for tx in &block.transactions {
          info!("tx {} type {} decoded: {}", tx.hash, tx.tx_type, tx.data.is_some());
        }
      }
      print(&response)
    }
    Command::Events { height } => print(&client.get_block_events(height).await?),
    Command::Validators { height } => print(&client.get_block_validators(height).await?),
    Command::Candidate { pub_key, height } => print(&client.get_candidate(&pub_key, height).await?),
    Command::Candidates { height, include_stakes } => {
      print(&client.get_candidates(height, include_stakes).await?)
    }
    Command::CoinInfo { symbol } => print(&client.get_coin_info(&symbol).await?),
    Command::Address { address } => print(&client.get_address(&address).await?),
    Command::Addresses { height, addresses } => print(&client.get_addresses(&addresses, height).await?),
    Command::EstimateTx { tx } => print(&client.get_estimate_tx(&tx).await?),
    Command::EstimateCoinBuy { coin_to_sell, coin_to_buy, value_to_buy } => {
      print(&client.get_estimate_coin_buy(&coin_to_sell, &coin_to_buy, &value_to_buy).await?)
    }
    Command::EstimateCoinSell { coin_to_sell, coin_to_buy, value_to_sell } => {
      print(&client.get_estimate_coin_sell(&coin_to_sell, &coin_to_buy, &value_to_sell).await?)
    }
    Command::EstimateCoinSellAll { coin_to_sell, coin_to_buy, value_to_sell, gas_price } => print(
      &client
        .get_estimate_coin_sell_all(&coin_to_sell, &coin_to_buy, &value_to_sell, &gas_price)
        .await?,
    ),
    Command::MinGasPrice => print(&client.get_min_gas_price().await?),
    Command::SendTransaction { tx } => print(&client.push_transaction(&tx).await?),
  }
}
