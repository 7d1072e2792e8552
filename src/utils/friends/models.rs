use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{timestamp, User, UserId};

pub type FriendshipId = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
    Blocked,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: FriendshipId,
    pub requester: User,
    pub addressee: User,
    pub status: FriendshipStatus,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl Friendship {
    pub fn involves(&self, user_id: UserId) -> bool {
        self.requester.id == user_id || self.addressee.id == user_id
    }

    /// The party that is not `user_id`, whichever side of the request it is on.
    pub fn other_party(&self, user_id: UserId) -> Option<&User> {
        if self.requester.id == user_id {
            Some(&self.addressee)
        } else if self.addressee.id == user_id {
            Some(&self.requester)
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequest {
    pub addressee_id: UserId,
}

/// Answer of `GET /friendships/status/{userId}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipStatusResponse {
    #[serde(default)]
    pub friendship_id: Option<FriendshipId>,
    #[serde(default)]
    pub status: Option<FriendshipStatus>,
    #[serde(default)]
    pub are_friends: bool,
    #[serde(default)]
    pub can_send_request: bool,
}

/// An accepted friendship seen from the current user's side.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub friendship_id: FriendshipId,
    pub user: User,
    #[serde(with = "timestamp::option")]
    pub since: Option<OffsetDateTime>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipView {
    pub friends: Vec<Friend>,
    pub pending_requests: Vec<Friendship>,
    pub sent_requests: Vec<Friendship>,
}
