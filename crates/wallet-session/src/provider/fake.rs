//! Fake providers for exercising the session state machine in tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::{EthereumProvider, ProviderEvent, SolanaProvider};
use crate::error::{Result, SessionError};

const EVENT_CAPACITY: usize = 16;

/// Configurable fake MetaMask provider
pub struct FakeEthereum {
    metamask: bool,
    selected: Option<String>,
    accounts: Vec<String>,
    network: String,
    reject: bool,
    failing: bool,
    events: broadcast::Sender<ProviderEvent>,
}

impl FakeEthereum {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            metamask: true,
            selected: None,
            accounts: Vec::new(),
            network: "mainnet".to_string(),
            reject: false,
            failing: false,
            events,
        }
    }

    /// Injected but not flagged as MetaMask
    pub fn unflagged(mut self) -> Self {
        self.metamask = false;
        self
    }

    /// Report an already-selected address (existing wallet session)
    pub fn with_selected(mut self, address: &str) -> Self {
        self.selected = Some(address.to_string());
        self
    }

    pub fn with_accounts(mut self, accounts: &[&str]) -> Self {
        self.accounts = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_network(mut self, network: &str) -> Self {
        self.network = network.to_string();
        self
    }

    /// Reject the next permission prompt (user denies access)
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Fail every async provider call
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Push an event to all subscribers
    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl EthereumProvider for FakeEthereum {
    fn is_metamask(&self) -> bool {
        self.metamask
    }

    fn selected_address(&self) -> Option<String> {
        self.selected.clone()
    }

    async fn list_accounts(&self) -> Result<Vec<String>> {
        if self.failing {
            return Err(SessionError::ProviderQueryFailed(
                "provider unavailable".to_string(),
            ));
        }
        Ok(self.accounts.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        if self.reject {
            return Err(SessionError::UserRejected);
        }
        if self.failing {
            return Err(SessionError::ProviderQueryFailed(
                "provider unavailable".to_string(),
            ));
        }
        Ok(self.accounts.clone())
    }

    async fn network_name(&self) -> Result<String> {
        if self.failing {
            return Err(SessionError::ProviderQueryFailed(
                "provider unavailable".to_string(),
            ));
        }
        Ok(self.network.clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}

/// Configurable fake Phantom provider
pub struct FakeSolana {
    phantom: bool,
    public_key: Option<String>,
    connected: AtomicBool,
    reject: bool,
    fail_disconnect: bool,
    disconnects: AtomicUsize,
    events: broadcast::Sender<ProviderEvent>,
}

impl FakeSolana {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            phantom: true,
            public_key: None,
            connected: AtomicBool::new(false),
            reject: false,
            fail_disconnect: false,
            disconnects: AtomicUsize::new(0),
            events,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.public_key = Some(key.to_string());
        self
    }

    /// Report an already-active connection (existing wallet session)
    pub fn already_connected(self) -> Self {
        self.connected.store(true, Ordering::SeqCst);
        self
    }

    /// Reject the next connection prompt (user denies access)
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Fail provider-side disconnect requests
    pub fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    /// Number of provider-side disconnects requested so far
    pub fn disconnect_calls(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    /// Push an event to all subscribers
    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl SolanaProvider for FakeSolana {
    fn is_phantom(&self) -> bool {
        self.phantom
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn public_key(&self) -> Option<String> {
        self.public_key.clone()
    }

    async fn connect(&self) -> Result<String> {
        if self.reject {
            return Err(SessionError::UserRejected);
        }
        let key = self.public_key.clone().ok_or_else(|| {
            SessionError::ProviderQueryFailed("no account available".to_string())
        })?;
        self.connected.store(true, Ordering::SeqCst);
        Ok(key)
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.fail_disconnect {
            return Err(SessionError::ProviderQueryFailed(
                "disconnect refused".to_string(),
            ));
        }
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}
