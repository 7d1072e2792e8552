use super::acknowledged;
use crate::{
    errors::ApiError,
    models::{Friendship, FriendshipId, FriendshipStatusResponse, SendFriendRequest, UserId},
    modules::http::HttpClient,
};

pub struct Friendships<'a>(pub(super) &'a HttpClient);

impl Friendships<'_> {
    pub async fn my(&self) -> Result<Vec<Friendship>, ApiError> {
        self.0.get("/friendships/my").await
    }

    pub async fn send_request(&self, addressee_id: UserId) -> Result<Friendship, ApiError> {
        self.0
            .post("/friendships/send-request", &SendFriendRequest { addressee_id })
            .await
    }

    pub async fn accept(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        self.0.post_empty(&format!("/friendships/{id}/accept")).await
    }

    pub async fn decline(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        self.0.post_empty(&format!("/friendships/{id}/decline")).await
    }

    pub async fn remove(&self, id: FriendshipId) -> Result<(), ApiError> {
        acknowledged(self.0.delete(&format!("/friendships/{id}")).await)
    }

    pub async fn block(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        self.0.post_empty(&format!("/friendships/{id}/block")).await
    }

    pub async fn status_with(&self, user_id: UserId) -> Result<FriendshipStatusResponse, ApiError> {
        self.0.get(&format!("/friendships/status/{user_id}")).await
    }
}
