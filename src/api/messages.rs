use super::{acknowledged, validated};
use crate::{
    errors::ApiError,
    models::{
        GroupMessage, MessageId, MessageInbox, PrivateMessage, SendGroupMessageRequest,
        SendPrivateMessageRequest, ShareWordSetGroupRequest, ShareWordSetPrivateRequest, UserId,
    },
    modules::http::HttpClient,
};

pub struct Messages<'a>(pub(super) &'a HttpClient);

impl Messages<'_> {
    pub async fn my(&self) -> Result<MessageInbox, ApiError> {
        self.0.get("/messages/my").await
    }

    pub async fn send_private(&self, req: &SendPrivateMessageRequest) -> Result<PrivateMessage, ApiError> {
        self.0.post("/messages/private", validated(req)?).await
    }

    pub async fn send_group(&self, req: &SendGroupMessageRequest) -> Result<GroupMessage, ApiError> {
        self.0.post("/messages/group", validated(req)?).await
    }

    pub async fn share_wordset_private(
        &self,
        req: &ShareWordSetPrivateRequest,
    ) -> Result<PrivateMessage, ApiError> {
        self.0
            .post("/messages/private/share-wordset", validated(req)?)
            .await
    }

    pub async fn share_wordset_group(
        &self,
        req: &ShareWordSetGroupRequest,
    ) -> Result<GroupMessage, ApiError> {
        self.0
            .post("/messages/group/share-wordset", validated(req)?)
            .await
    }

    pub async fn conversation(&self, user_id: UserId) -> Result<Vec<PrivateMessage>, ApiError> {
        self.0
            .get(&format!("/messages/private/conversation/{user_id}"))
            .await
    }

    pub async fn mark_read(&self, user_id: UserId) -> Result<(), ApiError> {
        acknowledged(
            self.0
                .post_empty(&format!("/messages/private/conversation/{user_id}/mark-read"))
                .await,
        )
    }

    pub async fn delete_private(&self, id: MessageId) -> Result<(), ApiError> {
        acknowledged(self.0.delete(&format!("/messages/private/{id}")).await)
    }

    pub async fn delete_group(&self, id: MessageId) -> Result<(), ApiError> {
        acknowledged(self.0.delete(&format!("/messages/group/{id}")).await)
    }
}
