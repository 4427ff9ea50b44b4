//! Injected wallet provider capabilities
//!
//! All chain interaction goes through these traits so the session never
//! touches ambient globals and tests can substitute fakes.

mod registry;
mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use registry::WalletProviderRegistry;
pub use traits::{EthereumProvider, ProviderEvent, SolanaProvider};
