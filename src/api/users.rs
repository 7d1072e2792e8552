use crate::{errors::ApiError, models::User, modules::http::HttpClient};

pub struct Users<'a>(pub(super) &'a HttpClient);

impl Users<'_> {
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.0.get("/users").await
    }
}
