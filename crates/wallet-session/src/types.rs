//! Session type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// The wallet kinds this crate knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletKind {
    MetaMask,
    Phantom,
}

impl WalletKind {
    /// Human-readable name shown in the wallet selector
    pub fn display_name(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "MetaMask",
            WalletKind::Phantom => "Phantom",
        }
    }

    /// Opaque icon resource handle for the hosting UI
    pub fn icon(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "assets/metamask-icon.png",
            WalletKind::Phantom => "assets/phantom-icon.png",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WalletKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MetaMask" => Ok(WalletKind::MetaMask),
            "Phantom" => Ok(WalletKind::Phantom),
            other => Err(SessionError::UnsupportedWallet(other.to_string())),
        }
    }
}

/// Metadata for a discovered wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDescriptor {
    /// Which wallet this descriptor refers to
    pub kind: WalletKind,
    /// Name shown in the selector list
    pub display_name: String,
    /// Icon resource handle
    pub icon: String,
}

impl WalletDescriptor {
    /// Build the descriptor for a wallet kind
    pub fn new(kind: WalletKind) -> Self {
        Self {
            kind,
            display_name: kind.display_name().to_string(),
            icon: kind.icon().to_string(),
        }
    }
}

/// Live connection state, the single source of truth for rendering
///
/// Invariant: `address` is non-empty exactly when `wallet` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Connected wallet, `None` when disconnected
    pub wallet: Option<WalletKind>,
    /// Connected account address, empty when disconnected
    pub address: String,
    /// Network name reported by the provider
    pub network: String,
}

impl SessionState {
    /// Number of leading address characters kept when truncating
    const SHORT_PREFIX: usize = 6;
    /// Number of trailing address characters kept when truncating
    const SHORT_SUFFIX: usize = 3;

    /// Build a connected state
    pub fn connected(
        wallet: WalletKind,
        address: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            wallet: Some(wallet),
            address: address.into(),
            network: network.into(),
        }
    }

    /// Check whether a wallet is connected
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Truncated address for the connected button, "0x1234...abc" style
    pub fn short_address(&self) -> String {
        if self.address.len() > Self::SHORT_PREFIX + Self::SHORT_SUFFIX {
            format!(
                "{}...{}",
                &self.address[..Self::SHORT_PREFIX],
                &self.address[self.address.len() - Self::SHORT_SUFFIX..]
            )
        } else {
            self.address.clone()
        }
    }

    /// Reset to the disconnected state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
