use super::{acknowledged, validated};
use crate::{
    errors::ApiError,
    models::{
        CreateGroupRequest, GroupDetails, GroupId, GroupMember, GroupRole, JoinByCodeRequest,
        MemberId, SearchQuery, StudyGroup, UpdateGroupRequest, UpdateRoleRequest,
    },
    modules::http::HttpClient,
};

pub struct Groups<'a>(pub(super) &'a HttpClient);

impl Groups<'_> {
    pub async fn my(&self) -> Result<Vec<StudyGroup>, ApiError> {
        self.0.get("/groups/my").await
    }

    pub async fn create(&self, req: &CreateGroupRequest) -> Result<StudyGroup, ApiError> {
        self.0.post("/groups", validated(req)?).await
    }

    pub async fn join(&self, id: GroupId) -> Result<StudyGroup, ApiError> {
        self.0.post_empty(&format!("/groups/{id}/join")).await
    }

    pub async fn join_by_code(&self, invite_code: &str) -> Result<StudyGroup, ApiError> {
        let req = JoinByCodeRequest {
            invite_code: invite_code.trim().to_string(),
        };
        self.0.post("/groups/join-by-code", validated(&req)?).await
    }

    pub async fn leave(&self, id: GroupId) -> Result<(), ApiError> {
        acknowledged(self.0.post_empty(&format!("/groups/{id}/leave")).await)
    }

    pub async fn get(&self, id: GroupId) -> Result<GroupDetails, ApiError> {
        self.0.get(&format!("/groups/{id}")).await
    }

    pub async fn update(&self, id: GroupId, req: &UpdateGroupRequest) -> Result<StudyGroup, ApiError> {
        self.0.put(&format!("/groups/{id}"), validated(req)?).await
    }

    pub async fn delete(&self, id: GroupId) -> Result<(), ApiError> {
        acknowledged(self.0.delete(&format!("/groups/{id}")).await)
    }

    pub async fn regenerate_code(&self, id: GroupId) -> Result<StudyGroup, ApiError> {
        self.0.post_empty(&format!("/groups/{id}/regenerate-code")).await
    }

    pub async fn remove_member(&self, id: GroupId, member_id: MemberId) -> Result<(), ApiError> {
        acknowledged(
            self.0
                .delete(&format!("/groups/{id}/members/{member_id}"))
                .await,
        )
    }

    pub async fn update_member_role(
        &self,
        id: GroupId,
        member_id: MemberId,
        role: GroupRole,
    ) -> Result<GroupMember, ApiError> {
        self.0
            .put(
                &format!("/groups/{id}/members/{member_id}/role"),
                &UpdateRoleRequest { role },
            )
            .await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<StudyGroup>, ApiError> {
        self.0
            .get_query("/groups/search", &SearchQuery { query })
            .await
    }
}
