//! Blocking user notices.

/// Shown whenever a flow needs the wallet extension and none is installed.
pub const WALLET_MISSING_NOTICE: &str =
    "You must install the metamask plugin in order to proceed.";

/// Interrupting notice the user has to acknowledge (a browser `alert`, a
/// message on stderr, ...).
pub trait Notifier {
    fn blocking_notice(&self, message: &str);
}

/// Notifier that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn blocking_notice(&self, message: &str) {
        log::warn!("⚠️  {}", message);
    }
}
