//! Error types for the withdrawal wallet

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Signing rejected: {0}")]
    SigningRejected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Secret store error: {0}")]
    Storage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
