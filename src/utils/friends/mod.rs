pub mod models;
pub mod projection;

use std::sync::Arc;
use tracing::warn;

use self::models::{Friendship, FriendshipId, FriendshipStatusResponse, FriendshipView};
use crate::{
    api::SocialApi,
    errors::ApiError,
    models::UserId,
    modules::notifications::Notifier,
    state::{Resource, Snapshot},
};

/// Friendship records as last loaded, with the projection computed from them.
#[derive(Debug, Clone, Default)]
pub struct Friendships {
    pub records: Vec<Friendship>,
    pub view: FriendshipView,
}

impl Friendships {
    fn project(records: Vec<Friendship>, me: Option<UserId>) -> Self {
        let view = match me {
            Some(me) => projection::partition(&records, me),
            None => {
                warn!("No user id in session, friendship lists stay empty");
                FriendshipView::default()
            }
        };
        Self { records, view }
    }
}

pub struct FriendshipStore {
    api: SocialApi,
    friendships: Resource<Friendships>,
}

impl FriendshipStore {
    pub fn new(api: SocialApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            friendships: Resource::new("friendships", notifier),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.friendships
            .load(async {
                let records = self.api.friendships().my().await?;
                Ok(Friendships::project(records, self.api.session().user_id()))
            })
            .await
    }

    pub async fn snapshot(&self) -> Snapshot<Friendships> {
        self.friendships.snapshot().await
    }

    pub async fn view(&self) -> FriendshipView {
        self.friendships
            .data()
            .await
            .map(|f| f.view)
            .unwrap_or_default()
    }

    pub async fn send_request(&self, user_id: UserId) -> Result<Friendship, ApiError> {
        let res = self.api.friendships().send_request(user_id).await;
        self.friendships
            .settle(res, "Friend request sent", self.load())
            .await
    }

    pub async fn accept(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        let res = self.api.friendships().accept(id).await;
        self.friendships
            .settle(res, "Friend request accepted", self.load())
            .await
    }

    pub async fn decline(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        let res = self.api.friendships().decline(id).await;
        self.friendships
            .settle(res, "Friend request declined", self.load())
            .await
    }

    pub async fn remove(&self, id: FriendshipId) -> Result<(), ApiError> {
        let res = self.api.friendships().remove(id).await;
        self.friendships
            .settle(res, "Friend removed", self.load())
            .await
    }

    pub async fn block(&self, id: FriendshipId) -> Result<Friendship, ApiError> {
        let res = self.api.friendships().block(id).await;
        self.friendships
            .settle(res, "User blocked", self.load())
            .await
    }

    pub async fn status_with(&self, user_id: UserId) -> Result<FriendshipStatusResponse, ApiError> {
        self.api.friendships().status_with(user_id).await
    }
}
