//! Registry of injected wallet providers

use std::sync::Arc;

use super::{EthereumProvider, SolanaProvider};
use crate::types::{WalletDescriptor, WalletKind};

/// Registry holding whichever providers the host environment injected
///
/// Passed into the session instead of reading ambient globals, so the
/// whole environment can be faked in tests.
#[derive(Default)]
pub struct WalletProviderRegistry {
    ethereum: Option<Arc<dyn EthereumProvider>>,
    solana: Option<Arc<dyn SolanaProvider>>,
}

impl WalletProviderRegistry {
    /// Create an empty registry (no providers injected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the Ethereum-style provider
    pub fn with_ethereum(mut self, provider: Arc<dyn EthereumProvider>) -> Self {
        self.ethereum = Some(provider);
        self
    }

    /// Register the Solana-style provider
    pub fn with_solana(mut self, provider: Arc<dyn SolanaProvider>) -> Self {
        self.solana = Some(provider);
        self
    }

    /// The Ethereum provider, if injected
    pub fn ethereum(&self) -> Option<&Arc<dyn EthereumProvider>> {
        self.ethereum.as_ref()
    }

    /// The Solana provider, if injected
    pub fn solana(&self) -> Option<&Arc<dyn SolanaProvider>> {
        self.solana.as_ref()
    }

    /// Whether a provider for the given wallet kind is installed
    pub fn is_installed(&self, kind: WalletKind) -> bool {
        match kind {
            WalletKind::MetaMask => self.ethereum.is_some(),
            WalletKind::Phantom => self.solana.is_some(),
        }
    }

    /// Scan for installed wallets
    ///
    /// Pure read: returns a descriptor for every injected provider whose
    /// wallet flag is set, MetaMask first. Safe when nothing is injected.
    pub fn discover(&self) -> Vec<WalletDescriptor> {
        let mut wallets = Vec::new();

        if let Some(eth) = &self.ethereum {
            if eth.is_metamask() {
                wallets.push(WalletDescriptor::new(WalletKind::MetaMask));
            }
        }

        if let Some(sol) = &self.solana {
            if sol.is_phantom() {
                wallets.push(WalletDescriptor::new(WalletKind::Phantom));
            }
        }

        wallets
    }
}
