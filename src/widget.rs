//! Embedded withdrawal widget handoff
//!
//! The widget itself is an external collaborator; this module only builds the
//! parameters it is handed (wallet contract plus static merchant settings)
//! and consumes the two events it emits back: frame height changes and the
//! success notification.

use serde_json::json;
use solana_sdk::pubkey::Pubkey;
use uuid::Uuid;

use crate::config::WidgetSettings;
use crate::wallet::WalletAdapter;

/// Frame height before the widget reports its own.
pub const DEFAULT_FRAME_HEIGHT: u32 = 1300;

/// Events emitted by the embedded widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    HeightChanged(u32),
    Success,
}

/// One withdrawal session handed to the embedded widget.
pub struct WithdrawSession {
    session_key: Uuid,
    wallet_address: Pubkey,
    endpoint: String,
    settings: WidgetSettings,
    frame_height: u32,
}

impl WithdrawSession {
    /// Start a session for a connected wallet.
    ///
    /// Returns `None` when the wallet has no resolved key; the widget is
    /// never mounted for a disconnected wallet.
    pub fn start(wallet: &dyn WalletAdapter, settings: &WidgetSettings) -> Option<Self> {
        let wallet_address = wallet.public_key()?;
        let endpoint = wallet.connection().url();

        let session = Self {
            session_key: Uuid::new_v4(),
            wallet_address,
            endpoint,
            settings: settings.clone(),
            frame_height: DEFAULT_FRAME_HEIGHT,
        };

        tracing::info!(
            session = %session.session_key,
            address = %wallet_address,
            merchant = %session.settings.merchant_id,
            "Withdrawal session started"
        );

        Some(session)
    }

    pub fn session_key(&self) -> Uuid {
        self.session_key
    }

    /// Current widget frame height.
    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Parameters handed to the embedded widget.
    pub fn params(&self) -> serde_json::Value {
        json!({
            "sessionKey": self.session_key.to_string(),
            "wallet": self.wallet_address.to_string(),
            "blockchain": "solana",
            "merchantId": self.settings.merchant_id,
            "env": self.settings.env.name(),
            "tokens": self.settings.tokens,
            "loaderBackground": self.settings.loader_background,
            "endpoint": self.endpoint,
        })
    }

    /// Apply an event reported by the widget.
    pub fn handle_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::HeightChanged(height) => {
                self.frame_height = height;
                tracing::debug!(height = height, "Widget frame resized");
            }
            WidgetEvent::Success => {
                tracing::info!(session = %self.session_key, "Withdraw success");
            }
        }
    }
}
