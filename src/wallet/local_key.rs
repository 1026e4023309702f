//! Wallet adapter backed by a locally stored secret
//!
//! SECURITY: This is the ONLY place where the stored secret is decoded into
//! key material.
//! - The secret is decoded per operation and dropped immediately after
//! - Key bytes are never logged and never appear in Debug output
//! - Invalid secret input is ignored; the wallet simply stays disconnected

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::sync::Arc;

use super::WalletAdapter;
use crate::storage::SecretStore;
use crate::{Error, Result};

/// Signs transactions with a secret kept in the [`SecretStore`].
///
/// The public key resolves at construction (from a previously stored secret)
/// or on [`Self::import_secret`]; once resolved it stays resolved for the
/// adapter's lifetime.
pub struct LocalKeyWalletAdapter {
    store: SecretStore,
    connection: Arc<RpcClient>,
    public_key: Option<Pubkey>,
}

impl LocalKeyWalletAdapter {
    /// Construct over the store, resolving the key from any stored secret.
    pub fn new(store: SecretStore, connection: Arc<RpcClient>) -> Self {
        let public_key = store
            .read()
            .and_then(|secret| decode_secret(secret.expose_secret()))
            .map(|keypair| keypair.pubkey());

        if let Some(address) = public_key {
            tracing::info!(address = %address, "Wallet restored from secret store");
        }

        Self {
            store,
            connection,
            public_key,
        }
    }

    /// Import pasted secret text: a JSON array of 64 key bytes.
    ///
    /// Valid input is persisted and resolves the public key; anything else
    /// returns `Ok(None)` and leaves the wallet disconnected. Only a store
    /// write failure is an error.
    pub fn import_secret(&mut self, text: &str) -> Result<Option<Pubkey>> {
        let Some(keypair) = decode_secret(text) else {
            tracing::warn!("Pasted secret did not decode to a keypair, ignoring");
            return Ok(None);
        };

        self.store.write(&SecretString::from(text.to_string()))?;

        let address = keypair.pubkey();
        self.public_key = Some(address);
        tracing::info!(address = %address, "Secret imported");
        Ok(Some(address))
    }
}

#[async_trait]
impl WalletAdapter for LocalKeyWalletAdapter {
    fn public_key(&self) -> Option<Pubkey> {
        self.public_key
    }

    fn connection(&self) -> Arc<RpcClient> {
        Arc::clone(&self.connection)
    }

    async fn send_transaction(&self, mut transaction: Transaction) -> Result<Option<Signature>> {
        if self.public_key.is_none() {
            tracing::debug!("send_transaction without a resolved key, skipping");
            return Ok(None);
        }

        // Decode fresh on every send; the store is the source of truth.
        let Some(secret) = self.store.read() else {
            return Ok(None);
        };
        let Some(keypair) = decode_secret(secret.expose_secret()) else {
            tracing::warn!("Stored secret no longer decodes, skipping send");
            return Ok(None);
        };

        // The caller is responsible for the blockhash on the message; unlike
        // the external-signer path, no refresh happens here.
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&keypair], blockhash)
            .map_err(|e| Error::Wallet(format!("Partial signing failed: {}", e)))?;

        let signature = self.connection.send_transaction(&transaction).await?;

        tracing::info!(signature = %signature, "Transaction submitted with local key");
        Ok(Some(signature))
    }
}

// Implement Debug manually to avoid exposing the store contents
impl std::fmt::Debug for LocalKeyWalletAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalKeyWalletAdapter")
            .field("public_key", &self.public_key)
            .field("store", &"[REDACTED]")
            .finish()
    }
}

/// Decode pasted secret text into a keypair.
///
/// Accepts the wallet-file convention: a JSON array of the 64 secret-key
/// bytes. Returns `None` for anything that is not valid JSON, not 64 bytes,
/// or not a valid keypair.
fn decode_secret(text: &str) -> Option<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(text).ok()?;
    Keypair::try_from(bytes.as_slice()).ok()
}
