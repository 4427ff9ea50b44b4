//! Durable mirror of the session state
//!
//! Stored as three string keys so a restored page can optimistically show the
//! last session before any provider responds. Never authoritative once a live
//! provider answers. The triple is all-or-nothing: a partial set of keys is
//! treated as absent and removed.

use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::{SessionState, WalletKind};

/// Storage key for the wallet kind
pub const WALLET_KIND_KEY: &str = "walletType";
/// Storage key for the account address
pub const ADDRESS_KEY: &str = "walletAddress";
/// Storage key for the network name
pub const NETWORK_KEY: &str = "network";

/// A complete persisted session triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub wallet: WalletKind,
    pub address: String,
    pub network: String,
}

impl PersistedSession {
    /// Capture the current state; `None` while disconnected
    pub fn from_state(state: &SessionState) -> Option<Self> {
        state.wallet.map(|wallet| Self {
            wallet,
            address: state.address.clone(),
            network: state.network.clone(),
        })
    }

    /// Convert into live session state
    pub fn into_state(self) -> SessionState {
        SessionState::connected(self.wallet, self.address, self.network)
    }

    /// Load the triple from storage
    ///
    /// Returns `Ok(None)` when no session is stored. A partial or
    /// unparseable triple is cleared and reported as absent.
    pub fn load(store: &dyn KeyValueStore) -> Result<Option<Self>> {
        let kind = store.get(WALLET_KIND_KEY)?;
        let address = store.get(ADDRESS_KEY)?;
        let network = store.get(NETWORK_KEY)?;

        match (kind, address, network) {
            (Some(kind), Some(address), Some(network)) if !address.is_empty() => {
                match kind.parse::<WalletKind>() {
                    Ok(wallet) => Ok(Some(Self {
                        wallet,
                        address,
                        network,
                    })),
                    Err(e) => {
                        warn!("Discarding persisted session: {e}");
                        Self::clear(store)?;
                        Ok(None)
                    }
                }
            }
            (None, None, None) => Ok(None),
            _ => {
                warn!("Discarding partially persisted session");
                Self::clear(store)?;
                Ok(None)
            }
        }
    }

    /// Write all three keys; a failed write clears whatever landed
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        let write = || -> Result<()> {
            store.set(WALLET_KIND_KEY, &self.wallet.to_string())?;
            store.set(ADDRESS_KEY, &self.address)?;
            store.set(NETWORK_KEY, &self.network)?;
            Ok(())
        };

        if let Err(e) = write() {
            let _ = Self::clear(store);
            return Err(e);
        }

        debug!(wallet = %self.wallet, "Persisted session");
        Ok(())
    }

    /// Remove all three keys; idempotent
    pub fn clear(store: &dyn KeyValueStore) -> Result<()> {
        store.remove(WALLET_KIND_KEY)?;
        store.remove(ADDRESS_KEY)?;
        store.remove(NETWORK_KEY)?;
        Ok(())
    }
}
