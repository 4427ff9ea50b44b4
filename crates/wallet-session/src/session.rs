//! Wallet-session state machine
//!
//! States are {Disconnected, Connected(kind)}. Connecting, disconnecting, and
//! provider events all funnel through one async mutex, so session mutations
//! are serialized even when a disconnect event arrives mid-connect.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::error::{Result, SessionError};
use crate::notify::{Notifier, Severity};
use crate::persist::PersistedSession;
use crate::provider::{ProviderEvent, WalletProviderRegistry};
use crate::storage::KeyValueStore;
use crate::types::{SessionState, WalletDescriptor, WalletKind};

/// Network name reported for Phantom connections
const SOLANA_NETWORK: &str = "Solana";

#[derive(Default)]
struct Inner {
    state: SessionState,
    /// `None` until discovery has run; `Some(vec![])` when nothing was found
    wallets: Option<Vec<WalletDescriptor>>,
    /// Whether the wallet selector is showing
    selector_open: bool,
}

/// The wallet session component
///
/// Cheap to clone; clones share state. Long-lived: there is no terminal
/// state, the session keeps reacting to events until dropped.
#[derive(Clone)]
pub struct WalletSession {
    registry: Arc<WalletProviderRegistry>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    inner: Arc<Mutex<Inner>>,
}

impl WalletSession {
    /// Create a disconnected session over the injected capabilities
    pub fn new(
        registry: Arc<WalletProviderRegistry>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            store,
            notifier,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// The provider registry this session was built with
    pub fn registry(&self) -> &WalletProviderRegistry {
        &self.registry
    }

    /// Snapshot of the current session state
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// Discovered wallets; `None` until [`discover`](Self::discover) has run
    pub async fn wallets(&self) -> Option<Vec<WalletDescriptor>> {
        self.inner.lock().await.wallets.clone()
    }

    /// Whether the wallet selector is showing
    pub async fn selector_open(&self) -> bool {
        self.inner.lock().await.selector_open
    }

    /// Show the wallet selector (the "Connect Wallet" action)
    pub async fn open_selector(&self) {
        self.inner.lock().await.selector_open = true;
    }

    /// Dismiss the wallet selector
    pub async fn close_selector(&self) {
        self.inner.lock().await.selector_open = false;
    }

    /// Scan the registry for installed wallets and cache the result
    pub async fn discover(&self) -> Vec<WalletDescriptor> {
        let wallets = self.registry.discover();
        debug!(count = wallets.len(), "Wallet discovery complete");

        self.inner.lock().await.wallets = Some(wallets.clone());
        wallets
    }

    /// Reconcile persisted session data with live provider state
    ///
    /// Runs once at mount. The persisted triple seeds the state
    /// optimistically; a live provider session then overrides it and is
    /// written back to storage. A provider failure clears everything rather
    /// than leaving stale data.
    pub async fn reconcile(&self) {
        let mut inner = self.inner.lock().await;

        match PersistedSession::load(self.store.as_ref()) {
            Ok(Some(saved)) => {
                debug!(wallet = %saved.wallet, "Restored persisted session");
                inner.state = saved.into_state();
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to load persisted session: {e}"),
        }

        match self.query_live().await {
            Ok(Some(live)) => {
                info!(wallet = %live.wallet, "Live wallet session found");
                self.apply_connected(&mut inner, live);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Live session check failed: {e}");
                self.disconnect_locked(&mut inner).await;
            }
        }
    }

    /// Query both providers for an existing session, Solana overriding Ethereum
    async fn query_live(&self) -> Result<Option<PersistedSession>> {
        let mut live = None;

        if let Some(eth) = self.registry.ethereum() {
            if eth.selected_address().is_some() {
                let accounts = eth.list_accounts().await?;
                let network = eth.network_name().await?;
                if let Some(address) = accounts.first() {
                    live = Some(PersistedSession {
                        wallet: WalletKind::MetaMask,
                        address: address.clone(),
                        network,
                    });
                }
            }
        }

        if let Some(sol) = self.registry.solana() {
            if sol.is_connected() {
                if let Some(key) = sol.public_key() {
                    live = Some(PersistedSession {
                        wallet: WalletKind::Phantom,
                        address: key,
                        network: SOLANA_NETWORK.to_string(),
                    });
                }
            }
        }

        Ok(live)
    }

    /// Connect to the wallet of the given kind
    ///
    /// A missing provider fails without touching the current state. Any
    /// failure after that (user rejection, provider error) is surfaced to the
    /// notifier and resolved by a full disconnect, so no partial session
    /// survives.
    pub async fn connect(&self, kind: WalletKind) -> Result<()> {
        let mut inner = self.inner.lock().await;

        if !self.registry.is_installed(kind) {
            self.notifier
                .notify(Severity::Error, &format!("Please install {kind}!"));
            return Err(SessionError::ProviderAbsent(kind));
        }

        match self.request_connection(kind).await {
            Ok(session) => {
                self.apply_connected(&mut inner, session);
                inner.selector_open = false;
                info!(wallet = %kind, address = %inner.state.short_address(), "Wallet connected");
                self.notifier.notify(
                    Severity::Success,
                    &format!("{kind} wallet connected successfully!"),
                );
                Ok(())
            }
            Err(e) => {
                warn!("Connection failed: {e}");
                self.notifier.notify(Severity::Error, &e.to_string());
                self.disconnect_locked(&mut inner).await;
                Err(e)
            }
        }
    }

    /// Run the provider-side connection handshake
    async fn request_connection(&self, kind: WalletKind) -> Result<PersistedSession> {
        match kind {
            WalletKind::MetaMask => {
                let eth = self
                    .registry
                    .ethereum()
                    .ok_or(SessionError::ProviderAbsent(kind))?;
                let accounts = eth.request_accounts().await?;
                let address = accounts.first().cloned().ok_or_else(|| {
                    SessionError::ProviderQueryFailed("no accounts returned".to_string())
                })?;
                let network = eth.network_name().await?;
                Ok(PersistedSession {
                    wallet: kind,
                    address,
                    network,
                })
            }
            WalletKind::Phantom => {
                let sol = self
                    .registry
                    .solana()
                    .ok_or(SessionError::ProviderAbsent(kind))?;
                let address = sol.connect().await?;
                Ok(PersistedSession {
                    wallet: kind,
                    address,
                    network: SOLANA_NETWORK.to_string(),
                })
            }
        }
    }

    /// Disconnect the current wallet
    ///
    /// Never fails from the caller's point of view; provider and storage
    /// errors are surfaced as notices or logs. Idempotent aside from the
    /// best-effort provider call.
    pub async fn disconnect(&self) {
        let mut inner = self.inner.lock().await;
        self.disconnect_locked(&mut inner).await;
    }

    async fn disconnect_locked(&self, inner: &mut Inner) {
        if inner.state.wallet == Some(WalletKind::Phantom) {
            if let Some(sol) = self.registry.solana() {
                if let Err(e) = sol.disconnect().await {
                    warn!("Provider-side disconnect failed: {e}");
                    self.notifier
                        .notify(Severity::Error, "Error disconnecting wallet");
                }
            }
        }

        inner.state.clear();
        inner.selector_open = false;

        if let Err(e) = PersistedSession::clear(self.store.as_ref()) {
            warn!("Failed to clear persisted session: {e}");
        }

        info!("Wallet disconnected");
        self.notifier
            .notify(Severity::Success, "Wallet disconnected successfully!");
    }

    /// React to an event pushed by a provider
    pub async fn handle_event(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.first() {
                None => {
                    debug!("Account list emptied, disconnecting");
                    self.disconnect().await;
                }
                Some(address) => {
                    let mut inner = self.inner.lock().await;
                    if !inner.state.is_connected() {
                        return;
                    }
                    inner.state.address = address.clone();
                    debug!(address = %inner.state.short_address(), "Active account changed");

                    // Keep the durable mirror in step with the live address
                    if let Some(session) = PersistedSession::from_state(&inner.state) {
                        if let Err(e) = session.save(self.store.as_ref()) {
                            warn!("Failed to persist account change: {e}");
                        }
                    }
                }
            },
            ProviderEvent::Disconnected => {
                debug!("Provider reported disconnect");
                self.disconnect().await;
            }
        }
    }

    /// Copy the connected address to the host clipboard
    pub async fn copy_address(&self, clipboard: &dyn Clipboard) -> Result<()> {
        let inner = self.inner.lock().await;
        if !inner.state.is_connected() {
            return Err(SessionError::NotConnected);
        }

        clipboard.copy(&inner.state.address)?;
        self.notifier
            .notify(Severity::Success, "Wallet address copied to clipboard!");
        Ok(())
    }

    /// Set the state and refresh the durable mirror
    fn apply_connected(&self, inner: &mut Inner, session: PersistedSession) {
        if let Err(e) = session.save(self.store.as_ref()) {
            warn!("Failed to persist session: {e}");
        }
        inner.state = session.into_state();
    }
}
