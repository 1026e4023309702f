//! Token balance query
//!
//! Queries the token accounts owned by a key, filtered by mint, and reduces
//! them to a single displayed quantity.
//!
//! This path is read-only and deliberately forgiving: zero matching accounts,
//! malformed account data, or a failed query all display as a balance of
//! exactly zero rather than an error.

use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_client::rpc_response::RpcKeyedAccount;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

/// Delay applied before the first balance fetch after a key becomes
/// available, giving the connection and key state time to settle. A one-shot
/// guard, not a retry or polling mechanism.
pub const BALANCE_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Fetch the displayed balance of `mint` held by `owner`.
pub async fn token_balance(connection: &RpcClient, owner: &Pubkey, mint: &Pubkey) -> f64 {
    let accounts = match connection
        .get_token_accounts_by_owner(owner, TokenAccountsFilter::Mint(*mint))
        .await
    {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::warn!(
                owner = %owner,
                mint = %mint,
                error = %e,
                "Balance query failed, displaying zero"
            );
            return 0.0;
        }
    };

    first_ui_amount(&accounts).unwrap_or(0.0)
}

/// [`token_balance`] behind the settle delay. Used for the first fetch after
/// the key becomes available.
pub async fn settled_token_balance(connection: &RpcClient, owner: &Pubkey, mint: &Pubkey) -> f64 {
    tokio::time::sleep(BALANCE_SETTLE_DELAY).await;
    token_balance(connection, owner, mint).await
}

/// Reduce the owned token accounts to the first account's UI amount.
fn first_ui_amount(accounts: &[RpcKeyedAccount]) -> Option<f64> {
    let first = accounts.first()?;

    let UiAccountData::Json(parsed) = &first.account.data else {
        return None;
    };

    parsed
        .parsed
        .get("info")?
        .get("tokenAmount")?
        .get("uiAmount")?
        .as_f64()
}
