pub mod client;
pub mod endpoint;
pub mod model;
pub mod transaction;

pub use client::MinterClient;
pub use endpoint::Endpoint;
pub use transaction::{TransactionData, TransactionType};
