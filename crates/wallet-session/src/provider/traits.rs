//! Provider trait definitions

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::error::Result;

/// Event pushed by a provider while the session is mounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The active account list changed; empty means the wallet revoked access
    AccountsChanged(Vec<String>),
    /// The provider dropped the connection
    Disconnected,
}

/// Trait for an Ethereum-style injected provider (MetaMask)
#[async_trait]
pub trait EthereumProvider: Send + Sync {
    /// Whether the provider flags itself as MetaMask
    fn is_metamask(&self) -> bool;

    /// Currently selected address, if the wallet has an active session
    fn selected_address(&self) -> Option<String>;

    /// List the accounts the page is already authorized for
    async fn list_accounts(&self) -> Result<Vec<String>>;

    /// Request account access; prompts the user and may be rejected
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Name of the network the provider is currently on
    async fn network_name(&self) -> Result<String>;

    /// Subscribe to account-change and disconnect events
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}

/// Trait for a Solana-style injected provider (Phantom)
#[async_trait]
pub trait SolanaProvider: Send + Sync {
    /// Whether the provider flags itself as Phantom
    fn is_phantom(&self) -> bool;

    /// Whether the provider reports an active connection
    fn is_connected(&self) -> bool;

    /// Public key of the connected account, if any
    fn public_key(&self) -> Option<String>;

    /// Request a connection; prompts the user and may be rejected.
    /// Returns the public key string on success.
    async fn connect(&self) -> Result<String>;

    /// Request a provider-side disconnect
    async fn disconnect(&self) -> Result<()>;

    /// Subscribe to disconnect events
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}
