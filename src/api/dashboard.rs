use crate::{
    errors::ApiError,
    models::{SearchQuery, SocialDashboard, SocialSearchResults, SocialStats},
    modules::http::HttpClient,
};

pub struct Social<'a>(pub(super) &'a HttpClient);

impl Social<'_> {
    pub async fn dashboard(&self) -> Result<SocialDashboard, ApiError> {
        self.0.get("/social/dashboard").await
    }

    pub async fn stats(&self) -> Result<SocialStats, ApiError> {
        self.0.get("/social/stats").await
    }

    pub async fn search(&self, query: &str) -> Result<SocialSearchResults, ApiError> {
        self.0
            .get_query("/social/search", &SearchQuery { query })
            .await
    }
}
