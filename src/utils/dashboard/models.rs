use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Friendship, PrivateMessage, StudyGroup, User};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialStats {
    #[serde(default)]
    pub total_friends: u32,
    #[serde(default)]
    pub total_groups: u32,
    #[serde(default)]
    pub unread_messages: u32,
    #[serde(default)]
    pub pending_friend_requests: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipInfo {
    #[serde(default)]
    pub recent_requests: Vec<Friendship>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    #[serde(default)]
    pub active_groups: Vec<StudyGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessagingInfo {
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub recent_messages: Vec<PrivateMessage>,
}

/// Read-only aggregate, recomputed by the server on every fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialDashboard {
    #[serde(default)]
    pub stats: SocialStats,
    #[serde(default)]
    pub friendship_info: FriendshipInfo,
    #[serde(default)]
    pub group_info: GroupInfo,
    #[serde(default)]
    pub messaging_info: MessagingInfo,
    // handed to the view untouched
    #[serde(default)]
    pub quick_actions: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialSearchResults {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub groups: Vec<StudyGroup>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchQuery<'a> {
    pub query: &'a str,
}
