use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::models::{not_blank, timestamp, User};

pub type GroupId = i64;
pub type MemberId = i64;

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupRole {
    Member,
    Moderator,
    Admin,
}

impl GroupRole {
    /// Whether views should offer role changes and member removal.
    /// Only a hint, the server decides.
    pub fn can_manage_members(self) -> bool {
        self >= GroupRole::Moderator
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub max_members: Option<u32>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl StudyGroup {
    pub fn is_full(&self) -> bool {
        matches!(self.max_members, Some(max) if self.member_count >= max)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: MemberId,
    pub user: User,
    pub role: GroupRole,
    #[serde(default, with = "timestamp::option")]
    pub joined_at: Option<OffsetDateTime>,
}

/// Answer of `GET /groups/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    #[serde(flatten)]
    pub group: StudyGroup,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl GroupDetails {
    pub fn admins(&self) -> impl Iterator<Item = &GroupMember> {
        self.members.iter().filter(|m| m.role == GroupRole::Admin)
    }
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(
        length(max = 100, message = "Group name is too long"),
        custom = "not_blank"
    )]
    pub name: String,
    #[validate(length(max = 500, message = "Description is too long"))]
    pub description: Option<String>,
    pub is_private: bool,
    #[validate(range(min = 2, max = 100, message = "A group takes between 2 and 100 members"))]
    pub max_members: u32,
}

impl CreateGroupRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>, max_members: u32) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            is_private: false,
            max_members,
        }
    }
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(max = 100, message = "Group name is too long"),
        custom = "not_blank"
    )]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description is too long"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 2, max = 100, message = "A group takes between 2 and 100 members"))]
    pub max_members: Option<u32>,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JoinByCodeRequest {
    #[validate(custom = "not_blank")]
    pub invite_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role: GroupRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_validation() {
        assert!(CreateGroupRequest::new("Test", "desc", 10).validate().is_ok());
        assert!(CreateGroupRequest::new("   ", "desc", 10).validate().is_err());
        assert!(CreateGroupRequest::new("Test", "desc", 1).validate().is_err());
        assert!(CreateGroupRequest::new("x".repeat(101), "desc", 10).validate().is_err());
    }

    #[test]
    fn partial_update_only_checks_present_fields() {
        assert!(UpdateGroupRequest::default().validate().is_ok());
        let update = UpdateGroupRequest {
            max_members: Some(500),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        let json = serde_json::to_value(UpdateGroupRequest {
            name: Some("Polyglots".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"name": "Polyglots"}));
    }

    #[test]
    fn roles_order_by_privilege() {
        assert!(GroupRole::Admin.can_manage_members());
        assert!(GroupRole::Moderator.can_manage_members());
        assert!(!GroupRole::Member.can_manage_members());
    }

    #[test]
    fn details_flatten_group_fields() {
        let details: GroupDetails = serde_json::from_str(
            r#"{
                "id": 3, "name": "Spanish", "memberCount": 2, "maxMembers": 2,
                "members": [
                    {"id": 1, "user": {"id": 10}, "role": "ADMIN"},
                    {"id": 2, "user": {"id": 11}, "role": "MEMBER"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(details.group.name, "Spanish");
        assert!(details.group.is_full());
        assert_eq!(details.admins().count(), 1);
    }
}
