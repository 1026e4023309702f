//! Withdrawal wallet service
//!
//! The wallet-abstraction layer of a hosted token withdrawal flow:
//! - One wallet contract over two key-management strategies
//!   (external signer vs. locally stored secret)
//! - Token balance lookup against a configured RPC endpoint
//! - Handoff parameters and event handling for the embedded withdrawal widget
//!
//! # Security Model
//!
//! - Secret material lives only in the secret store and the local-key adapter
//! - Secrets are never logged and never appear in Debug output
//! - The balance path is read-only

pub mod balance;
pub mod config;
pub mod storage;
pub mod tokens;
pub mod wallet;
pub mod widget;

mod error;

// Re-export commonly used types
pub use config::{Cluster, Config, RpcConfig, WidgetEnv, WidgetSettings};
pub use error::{Error, Result};
pub use storage::SecretStore;
pub use wallet::{ExternalSigner, ExternalWalletAdapter, LocalKeyWalletAdapter, WalletAdapter};
pub use widget::{WidgetEvent, WithdrawSession};
