pub mod models;

use std::sync::Arc;

use self::models::{SocialDashboard, SocialSearchResults, SocialStats};
use crate::{
    api::SocialApi,
    errors::ApiError,
    modules::notifications::Notifier,
    state::{Resource, Snapshot},
};

/// Landing page aggregate. Nothing here mutates, refreshing repeats the fetch.
pub struct DashboardStore {
    api: SocialApi,
    dashboard: Resource<SocialDashboard>,
}

impl DashboardStore {
    pub fn new(api: SocialApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            dashboard: Resource::new("dashboard", notifier),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.dashboard.load(self.api.social().dashboard()).await
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.load().await
    }

    pub async fn snapshot(&self) -> Snapshot<SocialDashboard> {
        self.dashboard.snapshot().await
    }

    pub async fn stats(&self) -> Result<SocialStats, ApiError> {
        self.api.social().stats().await
    }

    pub async fn search(&self, query: &str) -> Result<SocialSearchResults, ApiError> {
        self.api.social().search(query).await
    }
}
