//! Configuration for the withdrawal wallet

pub mod rpc;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::{Error, Result};

// Re-export RPC config
pub use rpc::RpcConfig;

/// Supported ledger clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
}

impl Cluster {
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        }
    }
}

/// Environment the embedded withdrawal widget runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WidgetEnv {
    #[default]
    Prod,
    Sandbox,
}

impl WidgetEnv {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEnv::Prod => "prod",
            WidgetEnv::Sandbox => "sandbox",
        }
    }
}

/// Static configuration for the embedded withdrawal widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Merchant identifier registered with the widget provider
    pub merchant_id: String,
    /// Widget environment
    #[serde(default)]
    pub env: WidgetEnv,
    /// Mints the widget accepts for withdrawal
    pub tokens: Vec<String>,
    /// Background color shown while the widget frame loads
    #[serde(default = "default_loader_background")]
    pub loader_background: String,
}

fn default_loader_background() -> String {
    "#000000".to_string()
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            merchant_id: "brale".to_string(),
            env: WidgetEnv::Prod,
            tokens: vec![crate::tokens::mints::SBC.to_string()],
            loader_background: default_loader_background(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cluster the connection handle points at
    pub cluster: Cluster,
    /// Mint of the token offered for withdrawal
    pub withdraw_mint: String,
    /// Embedded widget settings
    #[serde(default)]
    pub widget: WidgetSettings,
    /// Path of the secret store file
    #[serde(default = "default_secret_store_path")]
    pub secret_store_path: String,
}

fn default_secret_store_path() -> String {
    "wallet-secret.json".to_string()
}

impl Config {
    /// Parse the configured withdrawal mint.
    pub fn withdraw_mint_pubkey(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.withdraw_mint)
            .map_err(|e| Error::Config(format!("Invalid withdraw_mint: {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster: Cluster::MainnetBeta,
            withdraw_mint: crate::tokens::mints::SBC.to_string(),
            widget: WidgetSettings::default(),
            secret_store_path: default_secret_store_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_deserialize_defaults() {
        let value = serde_json::json!({
            "cluster": "mainnet-beta",
            "withdraw_mint": "DBAzBUXaLj1qANCseUPZz4sp9F8d2sc78C4vKjhbTGMA"
        });
        let parsed: Config = serde_json::from_value(value).expect("parse config");
        assert_eq!(parsed.cluster, Cluster::MainnetBeta);
        assert_eq!(parsed.widget.env, WidgetEnv::Prod);
        assert_eq!(parsed.widget.loader_background, "#000000");
        assert_eq!(parsed.secret_store_path, "wallet-secret.json");
    }

    #[test]
    fn config_deserialize_explicit() {
        let value = serde_json::json!({
            "cluster": "devnet",
            "withdraw_mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "widget": {
                "merchant_id": "example",
                "env": "sandbox",
                "tokens": ["EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"],
                "loader_background": "#ffffff"
            },
            "secret_store_path": "/tmp/slot.json"
        });
        let parsed: Config = serde_json::from_value(value).expect("parse config");
        assert_eq!(parsed.cluster, Cluster::Devnet);
        assert_eq!(parsed.widget.env, WidgetEnv::Sandbox);
        assert_eq!(parsed.widget.merchant_id, "example");
        assert_eq!(parsed.secret_store_path, "/tmp/slot.json");
    }

    #[test]
    fn withdraw_mint_parses() {
        let config = Config::default();
        assert_eq!(
            config.withdraw_mint_pubkey().unwrap(),
            crate::tokens::mints::SBC
        );

        let broken = Config {
            withdraw_mint: "not a mint".to_string(),
            ..Config::default()
        };
        assert!(broken.withdraw_mint_pubkey().is_err());
    }
}
