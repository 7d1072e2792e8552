use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::models::{not_blank, timestamp, GroupId, StudyGroup, User, UserId};

pub type MessageId = i64;
pub type WordSetId = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharedWordSet {
    pub id: WordSetId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub word_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMessage {
    pub id: MessageId,
    pub sender: User,
    pub recipient: User,
    pub content: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub shared_word_set: Option<SharedWordSet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub id: MessageId,
    pub sender: User,
    pub group: StudyGroup,
    pub content: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub shared_word_set: Option<SharedWordSet>,
}

/// Answer of `GET /messages/my`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageInbox {
    #[serde(default)]
    pub private_messages: Vec<PrivateMessage>,
    #[serde(default)]
    pub group_messages: Vec<GroupMessage>,
}

impl MessageInbox {
    pub fn unread_count(&self, me: UserId) -> usize {
        self.private_messages
            .iter()
            .filter(|m| m.recipient.id == me && !m.is_read)
            .count()
    }

    /// Latest message of every private conversation, newest first.
    pub fn conversation_heads(&self, me: UserId) -> Vec<&PrivateMessage> {
        let mut heads: Vec<&PrivateMessage> = Vec::new();
        for message in &self.private_messages {
            let peer = peer_of(message, me);
            match heads.iter().position(|h| peer_of(h, me) == peer) {
                Some(i) if heads[i].created_at < message.created_at => heads[i] = message,
                Some(_) => (),
                None => heads.push(message),
            }
        }
        heads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        heads
    }
}

fn peer_of(message: &PrivateMessage, me: UserId) -> UserId {
    if message.sender.id == me {
        message.recipient.id
    } else {
        message.sender.id
    }
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendPrivateMessageRequest {
    pub recipient_id: UserId,
    #[validate(
        length(max = 2000, message = "Message is too long"),
        custom = "not_blank"
    )]
    pub content: String,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendGroupMessageRequest {
    pub group_id: GroupId,
    #[validate(
        length(max = 2000, message = "Message is too long"),
        custom = "not_blank"
    )]
    pub content: String,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShareWordSetPrivateRequest {
    pub recipient_id: UserId,
    pub word_set_id: WordSetId,
    #[validate(length(max = 2000, message = "Message is too long"))]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShareWordSetGroupRequest {
    pub group_id: GroupId,
    pub word_set_id: WordSetId,
    #[validate(length(max = 2000, message = "Message is too long"))]
    pub message: Option<String>,
}
