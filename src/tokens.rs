//! Shared token registry
//!
//! Centralizes token metadata (mints, decimals, symbols) so the balance path,
//! the widget settings, and the CLI agree on what they are displaying.
//!
//! This module is the single source of truth for token information.

use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

/// Token metadata
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    /// Token symbol (e.g., "SBC", "USDC")
    pub symbol: &'static str,
    /// Number of decimals
    pub decimals: u8,
    /// Whether this is a stablecoin (pegged to $1)
    pub is_stablecoin: bool,
}

impl TokenInfo {
    /// Create a stablecoin token info
    pub const fn stablecoin(symbol: &'static str, decimals: u8) -> Self {
        Self {
            symbol,
            decimals,
            is_stablecoin: true,
        }
    }
}

/// Well-known mints
pub mod mints {
    use super::*;

    /// The withdrawal token
    pub const SBC: Pubkey = solana_sdk::pubkey!("DBAzBUXaLj1qANCseUPZz4sp9F8d2sc78C4vKjhbTGMA");
    pub const USDC: Pubkey = solana_sdk::pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
}

/// Token registry providing token info lookups
pub struct TokenRegistry {
    tokens: HashMap<Pubkey, TokenInfo>,
}

impl TokenRegistry {
    /// Create a new token registry with all known tokens
    pub fn new() -> Self {
        use mints::*;

        let mut tokens = HashMap::new();

        tokens.insert(SBC, TokenInfo::stablecoin("SBC", 6));
        tokens.insert(USDC, TokenInfo::stablecoin("USDC", 6));

        Self { tokens }
    }

    /// Get token info by mint
    pub fn get(&self, mint: &Pubkey) -> Option<&TokenInfo> {
        self.tokens.get(mint)
    }

    /// Get token info by mint string
    pub fn get_by_str(&self, mint: &str) -> Option<&TokenInfo> {
        let mint = mint.parse::<Pubkey>().ok()?;
        self.get(&mint)
    }

    /// Check if a mint is a known stablecoin
    pub fn is_stablecoin(&self, mint: &Pubkey) -> bool {
        self.tokens
            .get(mint)
            .map(|t| t.is_stablecoin)
            .unwrap_or(false)
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global token registry (lazy initialized)
static REGISTRY: std::sync::OnceLock<TokenRegistry> = std::sync::OnceLock::new();

/// Get the global token registry
pub fn registry() -> &'static TokenRegistry {
    REGISTRY.get_or_init(TokenRegistry::new)
}

/// Format a balance for the amount label, e.g. "12.3457 SBC".
pub fn format_amount_label(amount: f64, symbol: &str) -> String {
    format!("{:.4} {}", amount, symbol)
}

/// Format a balance as a currency figure, e.g. "$12.35".
///
/// Only meaningful for stablecoins, where one token is one dollar.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mints() {
        let registry = TokenRegistry::new();

        let sbc = registry.get(&mints::SBC).unwrap();
        assert_eq!(sbc.symbol, "SBC");
        assert_eq!(sbc.decimals, 6);
        assert!(sbc.is_stablecoin);

        assert!(registry.is_stablecoin(&mints::USDC));
    }

    #[test]
    fn test_unknown_mint() {
        let registry = TokenRegistry::new();
        assert!(registry.get(&Pubkey::new_unique()).is_none());
        assert!(registry.get_by_str("not a mint").is_none());
    }

    #[test]
    fn test_amount_label_rounds_to_four_decimals() {
        assert_eq!(format_amount_label(12.345678, "SBC"), "12.3457 SBC");
        assert_eq!(format_amount_label(0.0, "SBC"), "0.0000 SBC");
    }

    #[test]
    fn test_currency_rounds_to_two_decimals() {
        assert_eq!(format_currency(12.345678), "$12.35");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_global_registry() {
        let reg = registry();
        assert!(reg.get(&mints::SBC).is_some());
    }
}
