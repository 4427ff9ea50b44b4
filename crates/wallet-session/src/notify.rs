//! User notification seam
//!
//! The hosting UI renders these as toasts or any equivalent feedback channel.
//! The session never renders anything itself.

use tracing::{info, warn};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Trait for the transient-notification surface
pub trait Notifier: Send + Sync {
    /// Display a transient message to the user
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that routes notices to the log
///
/// Default choice for hosts without a toast surface.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => info!("{message}"),
            Severity::Error => warn!("{message}"),
        }
    }
}
