pub mod models;

use std::sync::Arc;

use self::models::{
    CreateGroupRequest, GroupDetails, GroupId, GroupMember, GroupRole, MemberId, StudyGroup,
    UpdateGroupRequest,
};
use crate::{
    api::SocialApi,
    errors::ApiError,
    modules::notifications::Notifier,
    state::{Resource, Snapshot},
};

/// The current user's groups. Membership changes are never patched in,
/// every mutation reloads `/groups/my`.
pub struct GroupStore {
    api: SocialApi,
    groups: Resource<Vec<StudyGroup>>,
}

impl GroupStore {
    pub fn new(api: SocialApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            groups: Resource::new("groups", notifier),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.groups.load(self.api.groups().my()).await
    }

    pub async fn snapshot(&self) -> Snapshot<Vec<StudyGroup>> {
        self.groups.snapshot().await
    }

    pub async fn find(&self, id: GroupId) -> Option<StudyGroup> {
        self.groups
            .data()
            .await?
            .into_iter()
            .find(|g| g.id == id)
    }

    pub async fn details(&self, id: GroupId) -> Result<GroupDetails, ApiError> {
        self.api.groups().get(id).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<StudyGroup>, ApiError> {
        self.api.groups().search(query).await
    }

    pub async fn create(&self, req: &CreateGroupRequest) -> Result<StudyGroup, ApiError> {
        let res = self.api.groups().create(req).await;
        self.groups.settle(res, "Group created", self.load()).await
    }

    pub async fn join(&self, id: GroupId) -> Result<StudyGroup, ApiError> {
        let res = self.api.groups().join(id).await;
        self.groups.settle(res, "Joined group", self.load()).await
    }

    pub async fn join_by_code(&self, invite_code: &str) -> Result<StudyGroup, ApiError> {
        let res = self.api.groups().join_by_code(invite_code).await;
        self.groups.settle(res, "Joined group", self.load()).await
    }

    pub async fn leave(&self, id: GroupId) -> Result<(), ApiError> {
        let res = self.api.groups().leave(id).await;
        self.groups.settle(res, "Left group", self.load()).await
    }

    pub async fn update(&self, id: GroupId, req: &UpdateGroupRequest) -> Result<StudyGroup, ApiError> {
        let res = self.api.groups().update(id, req).await;
        self.groups.settle(res, "Group updated", self.load()).await
    }

    pub async fn delete(&self, id: GroupId) -> Result<(), ApiError> {
        let res = self.api.groups().delete(id).await;
        self.groups.settle(res, "Group deleted", self.load()).await
    }

    pub async fn regenerate_code(&self, id: GroupId) -> Result<StudyGroup, ApiError> {
        let res = self.api.groups().regenerate_code(id).await;
        self.groups
            .settle(res, "Invite code regenerated", self.load())
            .await
    }

    pub async fn remove_member(&self, id: GroupId, member_id: MemberId) -> Result<(), ApiError> {
        let res = self.api.groups().remove_member(id, member_id).await;
        self.groups.settle(res, "Member removed", self.load()).await
    }

    pub async fn update_member_role(
        &self,
        id: GroupId,
        member_id: MemberId,
        role: GroupRole,
    ) -> Result<GroupMember, ApiError> {
        let res = self
            .api
            .groups()
            .update_member_role(id, member_id, role)
            .await;
        self.groups.settle(res, "Member role updated", self.load()).await
    }
}
