//! The wallet contract shared by both custody strategies

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::Arc;

use crate::Result;

/// Unified wallet interface consumed by the balance path, the widget handoff,
/// and anything else that needs to move tokens.
///
/// Implementations are chosen at composition time; the two shipped strategies
/// are [`super::ExternalWalletAdapter`] and [`super::LocalKeyWalletAdapter`].
/// The wallet starts disconnected and becomes connected on the first
/// successful key resolution; there is no modeled way back.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Public address currently backing this wallet, if any.
    fn public_key(&self) -> Option<Pubkey>;

    /// Whether a key has been resolved. Derived from [`Self::public_key`];
    /// the two are never out of sync.
    fn connected(&self) -> bool {
        self.public_key().is_some()
    }

    /// The shared ledger connection handle.
    fn connection(&self) -> Arc<RpcClient>;

    /// Sign and submit a transaction.
    ///
    /// Returns `Ok(None)` without touching the network when no public key is
    /// resolvable, so callers can check rather than catch. A rejection from
    /// the signer surfaces as `Err`; no retry is attempted at this layer.
    async fn send_transaction(&self, transaction: Transaction) -> Result<Option<Signature>>;
}

/// An external collaborator that holds key custody - typically a browser
/// wallet extension. This crate only consumes its public operations.
#[async_trait]
pub trait ExternalSigner: Send + Sync {
    /// Address the signer is currently connected with, if any.
    fn public_key(&self) -> Option<Pubkey>;

    /// Ask the signer to sign the transaction in place.
    ///
    /// Returns `Err` when the signer is absent or the user declines.
    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<()>;

    /// Submit a signed transaction through the signer's own send path.
    async fn send_transaction(
        &self,
        transaction: &Transaction,
        connection: &RpcClient,
    ) -> Result<Signature>;
}
