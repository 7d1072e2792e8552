pub mod models;

use dashmap::DashMap;
use std::sync::Arc;

use self::models::{
    GroupMessage, MessageId, MessageInbox, PrivateMessage, SendGroupMessageRequest,
    SendPrivateMessageRequest, ShareWordSetGroupRequest, ShareWordSetPrivateRequest,
};
use crate::{
    api::SocialApi,
    errors::ApiError,
    models::{GroupId, UserId, WordSetId},
    modules::notifications::Notifier,
    state::{Resource, Snapshot},
};

pub struct MessageStore {
    api: SocialApi,
    notifier: Arc<dyn Notifier>,
    inbox: Resource<MessageInbox>,
    conversations: DashMap<UserId, Arc<Resource<Vec<PrivateMessage>>>>,
}

impl MessageStore {
    pub fn new(api: SocialApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            inbox: Resource::new("messages", notifier.clone()),
            notifier,
            conversations: DashMap::new(),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.inbox.load(self.api.messages().my()).await
    }

    pub async fn snapshot(&self) -> Snapshot<MessageInbox> {
        self.inbox.snapshot().await
    }

    pub async fn unread_count(&self) -> usize {
        match (self.inbox.data().await, self.api.session().user_id()) {
            (Some(inbox), Some(me)) => inbox.unread_count(me),
            _ => 0,
        }
    }

    /// Starts tracking the conversation with `user_id` and loads it.
    pub async fn open_conversation(&self, user_id: UserId) -> Result<(), ApiError> {
        let conversation = self
            .conversations
            .entry(user_id)
            .or_insert_with(|| Arc::new(Resource::new("conversation", self.notifier.clone())))
            .clone();
        conversation
            .load(self.api.messages().conversation(user_id))
            .await
    }

    pub fn close_conversation(&self, user_id: UserId) {
        self.conversations.remove(&user_id);
    }

    pub async fn conversation(&self, user_id: UserId) -> Option<Snapshot<Vec<PrivateMessage>>> {
        let conversation = self.conversations.get(&user_id)?.clone();
        Some(conversation.snapshot().await)
    }

    pub async fn send_private(&self, recipient_id: UserId, content: &str) -> Result<PrivateMessage, ApiError> {
        let req = SendPrivateMessageRequest {
            recipient_id,
            content: content.to_string(),
        };
        let res = self.api.messages().send_private(&req).await;
        self.inbox
            .settle(res, "Message sent", self.reload(Some(recipient_id)))
            .await
    }

    pub async fn send_group(&self, group_id: GroupId, content: &str) -> Result<GroupMessage, ApiError> {
        let req = SendGroupMessageRequest {
            group_id,
            content: content.to_string(),
        };
        let res = self.api.messages().send_group(&req).await;
        self.inbox
            .settle(res, "Message sent", self.reload(None))
            .await
    }

    pub async fn share_wordset_private(
        &self,
        recipient_id: UserId,
        word_set_id: WordSetId,
        message: Option<String>,
    ) -> Result<PrivateMessage, ApiError> {
        let req = ShareWordSetPrivateRequest {
            recipient_id,
            word_set_id,
            message,
        };
        let res = self.api.messages().share_wordset_private(&req).await;
        self.inbox
            .settle(res, "Word set shared", self.reload(Some(recipient_id)))
            .await
    }

    pub async fn share_wordset_group(
        &self,
        group_id: GroupId,
        word_set_id: WordSetId,
        message: Option<String>,
    ) -> Result<GroupMessage, ApiError> {
        let req = ShareWordSetGroupRequest {
            group_id,
            word_set_id,
            message,
        };
        let res = self.api.messages().share_wordset_group(&req).await;
        self.inbox
            .settle(res, "Word set shared", self.reload(None))
            .await
    }

    pub async fn mark_read(&self, user_id: UserId) -> Result<(), ApiError> {
        let res = self.api.messages().mark_read(user_id).await;
        self.inbox
            .settle(res, "Conversation marked as read", self.reload(Some(user_id)))
            .await
    }

    pub async fn delete_private(&self, id: MessageId) -> Result<(), ApiError> {
        let peer = self.peer_of_private(id).await;
        let res = self.api.messages().delete_private(id).await;
        self.inbox
            .settle(res, "Message deleted", self.reload(peer))
            .await
    }

    pub async fn delete_group(&self, id: MessageId) -> Result<(), ApiError> {
        let res = self.api.messages().delete_group(id).await;
        self.inbox
            .settle(res, "Message deleted", self.reload(None))
            .await
    }

    // The inbox may never have been loaded, open conversations are checked too.
    async fn peer_of_private(&self, id: MessageId) -> Option<UserId> {
        let me = self.api.session().user_id()?;
        if let Some(inbox) = self.inbox.data().await {
            if let Some(m) = inbox.private_messages.iter().find(|m| m.id == id) {
                return Some(if m.sender.id == me { m.recipient.id } else { m.sender.id });
            }
        }

        let open = self
            .conversations
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect::<Vec<_>>();
        for (peer, conversation) in open {
            let holds = conversation
                .data()
                .await
                .map_or(false, |messages| messages.iter().any(|m| m.id == id));
            if holds {
                return Some(peer);
            }
        }
        None
    }

    // Inbox first, then the affected conversation if someone has it open.
    // Both run even if the inbox fails; the first error wins.
    async fn reload(&self, peer: Option<UserId>) -> Result<(), ApiError> {
        let inbox = self.load().await;
        let conversation = peer.and_then(|p| self.conversations.get(&p).map(|c| c.clone()));
        if let (Some(peer), Some(conversation)) = (peer, conversation) {
            let res = conversation
                .load(self.api.messages().conversation(peer))
                .await;
            return inbox.and(res);
        }
        inbox
    }
}
