//! RPC endpoint configuration
//!
//! Supports multiple configuration methods following Solana ecosystem conventions:
//! 1. Per-cluster env vars (MAINNET_RPC_URL, DEVNET_RPC_URL, etc.) - highest priority
//! 2. Provider API key (HELIUS_API_KEY) - builds URLs automatically
//! 3. Public cluster endpoints - for testing only
//!
//! # Examples
//!
//! ```bash
//! # Option 1: Per-cluster URLs (recommended for production)
//! export MAINNET_RPC_URL="https://mainnet.helius-rpc.com/?api-key=YOUR_KEY"
//!
//! # Option 2: Single provider API key
//! export HELIUS_API_KEY="YOUR_KEY"
//!
//! # Option 3: No env vars - uses public cluster endpoints (rate limited, for testing only)
//! ```

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::collections::HashMap;
use std::sync::Arc;

use super::Cluster;
use crate::{Error, Result};

/// RPC configuration for the supported clusters
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// RPC URLs indexed by cluster
    urls: HashMap<Cluster, String>,
}

/// Environment variable names
mod env_vars {
    // Per-cluster URLs (highest priority)
    pub const MAINNET_RPC_URL: &str = "MAINNET_RPC_URL";
    pub const DEVNET_RPC_URL: &str = "DEVNET_RPC_URL";
    pub const TESTNET_RPC_URL: &str = "TESTNET_RPC_URL";

    // Provider API keys
    pub const HELIUS_API_KEY: &str = "HELIUS_API_KEY";
}

/// Public cluster endpoints (rate limited, for testing only)
mod public_rpcs {
    pub const MAINNET_BETA: &str = "https://api.mainnet-beta.solana.com";
    pub const DEVNET: &str = "https://api.devnet.solana.com";
    pub const TESTNET: &str = "https://api.testnet.solana.com";
}

impl RpcConfig {
    /// Create RPC config from environment variables
    ///
    /// Priority:
    /// 1. Per-cluster env vars (MAINNET_RPC_URL, DEVNET_RPC_URL, TESTNET_RPC_URL)
    /// 2. HELIUS_API_KEY - builds URLs for mainnet and devnet
    /// 3. Public cluster endpoints (for testing only)
    pub fn from_env() -> Self {
        let mut urls = HashMap::new();

        // Priority 1: Check per-cluster env vars
        if let Ok(url) = std::env::var(env_vars::MAINNET_RPC_URL) {
            tracing::debug!("Using MAINNET_RPC_URL for mainnet-beta");
            urls.insert(Cluster::MainnetBeta, url);
        }
        if let Ok(url) = std::env::var(env_vars::DEVNET_RPC_URL) {
            tracing::debug!("Using DEVNET_RPC_URL for devnet");
            urls.insert(Cluster::Devnet, url);
        }
        if let Ok(url) = std::env::var(env_vars::TESTNET_RPC_URL) {
            tracing::debug!("Using TESTNET_RPC_URL for testnet");
            urls.insert(Cluster::Testnet, url);
        }

        // Priority 2: If no per-cluster vars, try HELIUS_API_KEY
        if urls.is_empty() {
            if let Ok(key) = std::env::var(env_vars::HELIUS_API_KEY) {
                tracing::info!("Building RPC URLs from HELIUS_API_KEY");
                urls.insert(
                    Cluster::MainnetBeta,
                    format!("https://mainnet.helius-rpc.com/?api-key={}", key),
                );
                urls.insert(
                    Cluster::Devnet,
                    format!("https://devnet.helius-rpc.com/?api-key={}", key),
                );
                // Note: Helius doesn't serve testnet
            }
        }

        // Priority 3: Fall back to public endpoints for any missing cluster
        if !urls.contains_key(&Cluster::MainnetBeta) {
            tracing::warn!("No RPC configured for mainnet-beta, using public endpoint (rate limited)");
        }
        urls.entry(Cluster::MainnetBeta)
            .or_insert_with(|| public_rpcs::MAINNET_BETA.to_string());
        urls.entry(Cluster::Devnet)
            .or_insert_with(|| public_rpcs::DEVNET.to_string());
        urls.entry(Cluster::Testnet)
            .or_insert_with(|| public_rpcs::TESTNET.to_string());

        Self { urls }
    }

    /// Create with explicit RPC URLs
    pub fn with_urls(urls: HashMap<Cluster, String>) -> Self {
        Self { urls }
    }

    /// Get RPC URL for a cluster
    pub fn get(&self, cluster: Cluster) -> Option<&str> {
        self.urls.get(&cluster).map(|s| s.as_str())
    }

    /// Check if a cluster is configured
    pub fn has_cluster(&self, cluster: Cluster) -> bool {
        self.urls.contains_key(&cluster)
    }

    /// Build the shared connection handle for a cluster.
    ///
    /// Constructed once per process and passed to every consumer; the handle
    /// is read-only after construction and safe to share.
    pub fn connection(&self, cluster: Cluster) -> Result<Arc<RpcClient>> {
        let raw = self
            .get(cluster)
            .ok_or_else(|| Error::Config(format!("No RPC URL configured for {}", cluster.name())))?;

        let url: url::Url = raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid RPC URL {}: {}", raw, e)))?;

        Ok(Arc::new(RpcClient::new_with_commitment(
            url.to_string(),
            CommitmentConfig::confirmed(),
        )))
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_all_clusters() {
        // Clear env vars for test
        std::env::remove_var(env_vars::MAINNET_RPC_URL);
        std::env::remove_var(env_vars::HELIUS_API_KEY);

        let config = RpcConfig::from_env();

        assert!(config.has_cluster(Cluster::MainnetBeta));
        assert!(config.has_cluster(Cluster::Devnet));
        assert!(config.has_cluster(Cluster::Testnet));
    }

    #[test]
    fn test_get_returns_url() {
        let mut urls = HashMap::new();
        urls.insert(Cluster::MainnetBeta, "https://custom.rpc".to_string());
        let config = RpcConfig::with_urls(urls);

        assert_eq!(config.get(Cluster::MainnetBeta), Some("https://custom.rpc"));
        assert_eq!(config.get(Cluster::Devnet), None);
    }

    #[test]
    fn test_public_rpc_fallbacks() {
        // Clear env vars
        std::env::remove_var(env_vars::MAINNET_RPC_URL);
        std::env::remove_var(env_vars::HELIUS_API_KEY);

        let config = RpcConfig::from_env();

        // Should fall back to public endpoints
        assert_eq!(
            config.get(Cluster::MainnetBeta),
            Some(public_rpcs::MAINNET_BETA)
        );
        assert_eq!(config.get(Cluster::Devnet), Some(public_rpcs::DEVNET));
    }

    #[test]
    fn test_connection_rejects_bad_url() {
        let mut urls = HashMap::new();
        urls.insert(Cluster::MainnetBeta, "not a url".to_string());
        let config = RpcConfig::with_urls(urls);

        assert!(config.connection(Cluster::MainnetBeta).is_err());
        assert!(config.connection(Cluster::Devnet).is_err());
    }
}
