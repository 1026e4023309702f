//! Wallet abstraction
//!
//! One contract, two custody strategies: an external signer (a browser wallet
//! extension or similar) or a locally stored secret. Consumers hold a
//! `dyn WalletAdapter` and never learn which strategy backs it.

mod adapter;
mod external;
mod local_key;

pub use adapter::{ExternalSigner, WalletAdapter};
pub use external::ExternalWalletAdapter;
pub use local_key::LocalKeyWalletAdapter;
