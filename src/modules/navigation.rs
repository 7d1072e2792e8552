use tokio::sync::broadcast;
use tracing::{info, warn};

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Publishes routes to whichever view layer subscribed.
#[derive(Clone)]
pub struct NavigationChannel {
    tx: broadcast::Sender<String>,
}

impl NavigationChannel {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(16);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for NavigationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for NavigationChannel {
    fn navigate(&self, route: &str) {
        if self.tx.send(route.to_string()).is_err() {
            warn!("Navigation to {route} dropped, nobody is listening");
        }
    }
}

pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!("Redirecting to {route}");
    }
}
