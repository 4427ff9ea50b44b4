//! Provider event subscriptions bound to the session lifetime
//!
//! Subscribe on mount, release on unmount: dropping the binding aborts the
//! forwarding tasks, so no callback outlives the component on any exit path.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::provider::ProviderEvent;
use crate::session::WalletSession;

/// RAII guard over the session's provider event subscriptions
pub struct EventBinding {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBinding {
    /// Subscribe to every installed provider and forward events into the session
    pub fn bind(session: &WalletSession) -> Self {
        let mut tasks = Vec::new();

        if let Some(eth) = session.registry().ethereum() {
            tasks.push(Self::forward(session.clone(), eth.subscribe()));
        }
        if let Some(sol) = session.registry().solana() {
            tasks.push(Self::forward(session.clone(), sol.subscribe()));
        }

        debug!(subscriptions = tasks.len(), "Provider events bound");
        Self { tasks }
    }

    fn forward(
        session: WalletSession,
        mut events: broadcast::Receiver<ProviderEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => session.handle_event(event).await,
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        debug!(missed, "Provider event subscription lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::notify::LogNotifier;
    use crate::provider::fake::FakeEthereum;
    use crate::provider::WalletProviderRegistry;
    use crate::storage::MemoryStore;
    use crate::types::WalletKind;

    const ETH_ADDR: &str = "0x1234567890123456789012345678901234567890";

    async fn wait_until_disconnected(session: &WalletSession) -> bool {
        for _ in 0..100 {
            if !session.state().await.is_connected() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_binding_forwards_disconnect_events() {
        let eth = Arc::new(FakeEthereum::new().with_accounts(&[ETH_ADDR]));
        let registry = WalletProviderRegistry::new().with_ethereum(eth.clone());
        let session = WalletSession::new(
            Arc::new(registry),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNotifier),
        );

        session.connect(WalletKind::MetaMask).await.unwrap();
        let _binding = EventBinding::bind(&session);

        eth.emit(ProviderEvent::Disconnected);
        assert!(wait_until_disconnected(&session).await);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_binding_forwards_solana_disconnect() {
        let sol = Arc::new(crate::provider::fake::FakeSolana::new().with_key("SoLKey1"));
        let registry = WalletProviderRegistry::new().with_solana(sol.clone());
        let session = WalletSession::new(
            Arc::new(registry),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNotifier),
        );

        session.connect(WalletKind::Phantom).await.unwrap();
        let _binding = EventBinding::bind(&session);

        sol.emit(ProviderEvent::Disconnected);
        assert!(wait_until_disconnected(&session).await);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_dropped_binding_stops_forwarding() {
        let eth = Arc::new(FakeEthereum::new().with_accounts(&[ETH_ADDR]));
        let registry = WalletProviderRegistry::new().with_ethereum(eth.clone());
        let session = WalletSession::new(
            Arc::new(registry),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNotifier),
        );

        session.connect(WalletKind::MetaMask).await.unwrap();
        drop(EventBinding::bind(&session));

        eth.emit(ProviderEvent::Disconnected);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(session.state().await.is_connected());
    }

    #[tokio::test]
    async fn test_binding_without_providers_is_empty() {
        let session = WalletSession::new(
            Arc::new(WalletProviderRegistry::new()),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNotifier),
        );

        let binding = EventBinding::bind(&session);
        assert!(binding.tasks.is_empty());
    }
}
