//! Navigation seam used for the global sign-out redirect.

use tokio::sync::mpsc;

/// Something that can send the user to another screen.
pub trait Navigator: Send + Sync {
    /// Hard-navigate to `path` (e.g. the login entry point).
    fn navigate(&self, path: &str);
}

/// Navigator for headless use: records the redirect in the log only.
#[derive(Debug, Default, Clone)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigation requested");
    }
}

/// Forwards navigation requests to a UI event loop.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Create a navigator and the receiver the UI should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        if self.tx.send(path.to_string()).is_err() {
            tracing::warn!(path, "Navigation dropped, UI receiver closed");
        }
    }
}
