//! Client for the Minter full node HTTP JSON API.
//!
//! ```no_run
//! # async fn run() -> Result<(), minter_node_api::types::ApiError> {
//! use minter_node_api::coin::minter::MinterClient;
//!
//! let client = MinterClient::new("http://localhost:8841".to_string());
//! let block = client.get_block(12).await?.into_result()?;
//! for tx in block.transactions {
//!   println!("{} {:?}", tx.hash, tx.data);
//! }
//! # Ok(())
//! # }
//! ```

pub mod coin;
pub mod config;
pub mod types;

pub use coin::minter::MinterClient;
pub use types::{ApiError, ApiResult};
