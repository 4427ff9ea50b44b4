//! # wallet-session
//!
//! Wallet-session state machine for browser-injected wallet providers
//! (MetaMask via an Ethereum provider, Phantom via a Solana provider):
//! - Discovery of installed wallets through an injected provider registry
//! - Startup reconciliation of persisted and live session state (live wins)
//! - Connect/disconnect protocol with clean failure handling
//! - Account-change and disconnect event handling bound to an RAII guard
//!
//! All chain interaction and all host capabilities (storage, clipboard,
//! notifications) are consumed through traits; this crate renders nothing.

pub mod clipboard;
pub mod error;
pub mod events;
pub mod notify;
pub mod persist;
pub mod provider;
pub mod session;
pub mod storage;
pub mod types;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::{Result, SessionError};
pub use events::EventBinding;
pub use notify::{LogNotifier, Notifier, Severity};
pub use persist::PersistedSession;
pub use provider::{EthereumProvider, ProviderEvent, SolanaProvider, WalletProviderRegistry};
pub use session::WalletSession;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::{SessionState, WalletDescriptor, WalletKind};
