//! Wallet adapter backed by an external signer
//!
//! Key custody stays with the signer (e.g. a browser wallet extension); this
//! adapter only freshens the transaction and brokers the sign/send calls.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::Arc;

use super::{ExternalSigner, WalletAdapter};
use crate::Result;

/// Delegates custody to an [`ExternalSigner`].
///
/// The send path fetches the latest blockhash, stamps it on the transaction,
/// asks the signer to sign, then submits through the signer's own send path.
pub struct ExternalWalletAdapter {
    signer: Arc<dyn ExternalSigner>,
    connection: Arc<RpcClient>,
}

impl ExternalWalletAdapter {
    pub fn new(signer: Arc<dyn ExternalSigner>, connection: Arc<RpcClient>) -> Self {
        Self { signer, connection }
    }
}

#[async_trait]
impl WalletAdapter for ExternalWalletAdapter {
    fn public_key(&self) -> Option<Pubkey> {
        self.signer.public_key()
    }

    fn connection(&self) -> Arc<RpcClient> {
        Arc::clone(&self.connection)
    }

    async fn send_transaction(&self, mut transaction: Transaction) -> Result<Option<Signature>> {
        if self.signer.public_key().is_none() {
            tracing::debug!("send_transaction without a resolved key, skipping");
            return Ok(None);
        }

        let blockhash = self.connection.get_latest_blockhash().await?;
        transaction.message.recent_blockhash = blockhash;

        self.signer.sign_transaction(&mut transaction).await?;

        let signature = self
            .signer
            .send_transaction(&transaction, &self.connection)
            .await?;

        tracing::info!(signature = %signature, "Transaction submitted via external signer");
        Ok(Some(signature))
    }
}

impl std::fmt::Debug for ExternalWalletAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalWalletAdapter")
            .field("public_key", &self.signer.public_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    /// Signer that never connects.
    struct AbsentSigner;

    #[async_trait]
    impl ExternalSigner for AbsentSigner {
        fn public_key(&self) -> Option<Pubkey> {
            None
        }

        async fn sign_transaction(&self, _transaction: &mut Transaction) -> Result<()> {
            Err(Error::SigningRejected("signer absent".to_string()))
        }

        async fn send_transaction(
            &self,
            _transaction: &Transaction,
            _connection: &RpcClient,
        ) -> Result<Signature> {
            Err(Error::SigningRejected("signer absent".to_string()))
        }
    }

    /// Signer with a fixed key, used to exercise the connected state.
    struct FixedKeySigner(Pubkey);

    #[async_trait]
    impl ExternalSigner for FixedKeySigner {
        fn public_key(&self) -> Option<Pubkey> {
            Some(self.0)
        }

        async fn sign_transaction(&self, _transaction: &mut Transaction) -> Result<()> {
            Ok(())
        }

        async fn send_transaction(
            &self,
            _transaction: &Transaction,
            _connection: &RpcClient,
        ) -> Result<Signature> {
            Ok(Signature::default())
        }
    }

    fn unreachable_connection() -> Arc<RpcClient> {
        // Constructed but never contacted in these tests
        Arc::new(RpcClient::new("http://127.0.0.1:1".to_string()))
    }

    #[tokio::test]
    async fn test_send_without_key_short_circuits() {
        let adapter =
            ExternalWalletAdapter::new(Arc::new(AbsentSigner), unreachable_connection());

        assert!(!adapter.connected());

        // Must return None before any network I/O; the connection points at a
        // closed port, so a fetch attempt would error instead.
        let result = adapter.send_transaction(Transaction::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_connected_derives_from_signer() {
        let key = Pubkey::new_unique();
        let adapter = ExternalWalletAdapter::new(
            Arc::new(FixedKeySigner(key)),
            unreachable_connection(),
        );

        assert!(adapter.connected());
        assert_eq!(adapter.public_key(), Some(key));
    }
}
