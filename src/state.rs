use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::{
    api::SocialApi,
    configuration::Settings,
    errors::ApiError,
    modules::{
        http::HttpClient,
        navigation::Navigator,
        notifications::{Notification, Notifier},
    },
    utils::{
        dashboard::DashboardStore, friends::FriendshipStore, groups::GroupStore,
        messages::MessageStore,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<String>,
}

struct Inner<T> {
    status: Status,
    data: Option<T>,
    error: Option<String>,
    applied: u64,
}

/// Client side copy of one server collection.
///
/// Each successful load replaces the whole value. Loads are ticketed and a
/// response is dropped when a load issued after it has already been applied.
pub struct Resource<T> {
    name: &'static str,
    inner: RwLock<Inner<T>>,
    tickets: AtomicU64,
    notifier: Arc<dyn Notifier>,
}

impl<T: Clone> Resource<T> {
    pub fn new(name: &'static str, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            name,
            inner: RwLock::new(Inner {
                status: Status::Loading,
                data: None,
                error: None,
                applied: 0,
            }),
            tickets: AtomicU64::new(0),
            notifier,
        }
    }

    pub async fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.read().await;
        Snapshot {
            status: inner.status,
            data: inner.data.clone(),
            error: inner.error.clone(),
        }
    }

    pub async fn status(&self) -> Status {
        self.inner.read().await.status
    }

    pub async fn data(&self) -> Option<T> {
        self.inner.read().await.data.clone()
    }

    pub async fn load<F>(&self, fetch: F) -> Result<(), ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.write().await.status = Status::Loading;
        debug!("Loading {} (#{ticket})", self.name);

        let res = fetch.await;

        let mut inner = self.inner.write().await;
        if ticket < inner.applied {
            warn!(
                "Dropping stale {} response #{ticket}, #{} already applied",
                self.name, inner.applied
            );
            return res.map(|_| ());
        }
        inner.applied = ticket;

        match res {
            Ok(data) => {
                inner.data = Some(data);
                inner.error = None;
                inner.status = Status::Ready;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load {}: {e}", self.name);
                let message = e.user_message();
                inner.error = Some(message.clone());
                inner.status = Status::Error;
                drop(inner);
                self.notifier.notify(Notification::error(message));
                Err(e)
            }
        }
    }

    /// Finishes a mutation: notify, then reload on success; notify once and keep the cache on failure.
    pub async fn settle<R, F>(
        &self,
        result: Result<R, ApiError>,
        success: &str,
        reload: F,
    ) -> Result<R, ApiError>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        match result {
            Ok(value) => {
                info!("{success}");
                self.notifier.notify(Notification::success(success));
                if let Err(e) = reload.await {
                    warn!("Reload of {} after mutation failed: {e}", self.name);
                }
                Ok(value)
            }
            Err(e) => {
                warn!("Mutation on {} failed: {e}", self.name);
                self.notifier.notify(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }
}

/// The one set of stores a view layer works with, all over the same api client.
#[derive(Clone)]
pub struct SocialState {
    pub api: SocialApi,
    pub friendships: Arc<FriendshipStore>,
    pub groups: Arc<GroupStore>,
    pub messages: Arc<MessageStore>,
    pub dashboard: Arc<DashboardStore>,
}

impl SocialState {
    pub fn new(api: SocialApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            friendships: Arc::new(FriendshipStore::new(api.clone(), notifier.clone())),
            groups: Arc::new(GroupStore::new(api.clone(), notifier.clone())),
            messages: Arc::new(MessageStore::new(api.clone(), notifier.clone())),
            dashboard: Arc::new(DashboardStore::new(api.clone(), notifier)),
            api,
        }
    }

    pub fn from_settings(
        config: &Settings,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = HttpClient::new(config.app.clone(), config.session(), navigator)?;
        Ok(Self::new(SocialApi::new(http), notifier))
    }

    /// Initial load of every store, one after another.
    ///
    /// A failing store does not stop the others. Its error is logged and returned.
    pub async fn load_all(&self) -> Vec<ApiError> {
        let results = [
            ("friendships", self.friendships.load().await),
            ("groups", self.groups.load().await),
            ("messages", self.messages.load().await),
            ("dashboard", self.dashboard.load().await),
        ];
        let mut errors = Vec::new();
        for (name, res) in results {
            if let Err(e) = res {
                warn!("Initial load of {name} failed: {e}");
                errors.push(e);
            }
        }
        errors
    }
}
