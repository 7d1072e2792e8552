
use client::{
    errors::ApiError,
    models::FriendshipStatus,
    modules::notifications::{Level, Notification},
    Status,
};
use tools::{AppData, ANA, BEN, CLEO, ZED};

#[tokio::test]
async fn send_request() {
    let app = AppData::new().await;
    let ana = app.client(ANA);

    let record = ana.state.friendships.send_request(ZED).await.unwrap();
    assert_eq!(record.status, FriendshipStatus::Pending);
    assert_eq!(record.addressee.id, ZED);

    let snapshot = ana.state.friendships.snapshot().await;
    assert_eq!(snapshot.status, Status::Ready);
    let friendships = snapshot.data.unwrap();
    assert!(friendships
        .records
        .iter()
        .any(|f| f.addressee.id == ZED && f.status == FriendshipStatus::Pending));
    assert_eq!(friendships.view.sent_requests.len(), 1);
    assert!(friendships.view.pending_requests.is_empty());

    assert_eq!(
        ana.notifications.drain(),
        vec![Notification::success("Friend request sent")]
    );
}

#[tokio::test]
async fn accept_request() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Pending);
    let ana = app.client(ANA);

    ana.state.friendships.load().await.unwrap();
    let view = ana.state.friendships.view().await;
    assert_eq!(view.pending_requests.len(), 1);
    assert_eq!(view.pending_requests[0].id, 7);

    ana.state.friendships.accept(7).await.unwrap();
    let view = ana.state.friendships.view().await;
    assert!(view.pending_requests.is_empty());
    assert_eq!(view.friends.len(), 1);
    assert_eq!(view.friends[0].friendship_id, 7);
    assert_eq!(view.friends[0].user.id, CLEO);
    assert_eq!(app.friendship_status(7), Some(FriendshipStatus::Accepted));
}

#[tokio::test]
async fn requests_split_by_direction() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Pending);
    app.seed_friendship(8, ANA, BEN, FriendshipStatus::Pending);
    app.seed_friendship(9, BEN, CLEO, FriendshipStatus::Accepted);

    let ana = app.client(ANA);
    ana.state.friendships.load().await.unwrap();
    let view = ana.state.friendships.view().await;
    assert_eq!(view.pending_requests.iter().map(|f| f.id).collect::<Vec<_>>(), vec![7]);
    assert_eq!(view.sent_requests.iter().map(|f| f.id).collect::<Vec<_>>(), vec![8]);
    assert!(view.friends.is_empty());

    let cleo = app.client(CLEO);
    cleo.state.friendships.load().await.unwrap();
    let view = cleo.state.friendships.view().await;
    assert_eq!(view.sent_requests.iter().map(|f| f.id).collect::<Vec<_>>(), vec![7]);
    assert!(view.pending_requests.is_empty());
    assert_eq!(view.friends.len(), 1);
    assert_eq!(view.friends[0].user.id, BEN);
}

#[tokio::test]
async fn decline_request() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Pending);
    let ana = app.client(ANA);

    ana.state.friendships.decline(7).await.unwrap();
    let view = ana.state.friendships.view().await;
    assert!(view.pending_requests.is_empty());
    assert!(view.friends.is_empty());
    assert_eq!(app.friendship_status(7), Some(FriendshipStatus::Declined));
}

#[tokio::test]
async fn remove_friend() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Accepted);
    let ana = app.client(ANA);
    ana.state.friendships.load().await.unwrap();
    assert_eq!(ana.state.friendships.view().await.friends.len(), 1);

    ana.notifications.drain();

    // the backend acknowledges with a json message instead of an empty body
    ana.state.friendships.remove(7).await.unwrap();
    assert!(ana.state.friendships.view().await.friends.is_empty());
    assert_eq!(app.friendship_status(7), None);
    assert_eq!(
        ana.notifications.drain(),
        vec![Notification::success("Friend removed")]
    );
    assert_eq!(app.count_requests("GET /friendships/my"), 2);
}

#[tokio::test]
async fn block_user() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Accepted);
    let ana = app.client(ANA);

    ana.state.friendships.block(7).await.unwrap();
    let friendships = ana.state.friendships.snapshot().await.data.unwrap();
    assert_eq!(friendships.records.len(), 1);
    assert!(friendships.view.friends.is_empty());
    assert!(friendships.view.pending_requests.is_empty());
    assert!(friendships.view.sent_requests.is_empty());
}

#[tokio::test]
async fn failed_request_keeps_cache() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Accepted);
    let ana = app.client(ANA);
    ana.state.friendships.load().await.unwrap();
    let before = ana.state.friendships.snapshot().await.data.unwrap();

    let err = ana.state.friendships.send_request(ANA).await.unwrap_err();
    assert!(matches!(err, ApiError::Client { .. }));

    let after = ana.state.friendships.snapshot().await;
    assert_eq!(after.status, Status::Ready);
    assert_eq!(after.data.unwrap().records, before.records);

    let notifications = ana.notifications.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, Level::Error);
    assert_eq!(notifications[0].message, "You cannot befriend yourself");

    // no reload after a failed mutation
    assert_eq!(app.count_requests("GET /friendships/my"), 1);
}

#[tokio::test]
async fn second_request_is_rejected() {
    let app = AppData::new().await;
    let ana = app.client(ANA);

    ana.state.friendships.send_request(BEN).await.unwrap();
    let err = ana.state.friendships.send_request(BEN).await.unwrap_err();
    assert_eq!(err.user_message(), "Friend request already sent");
    assert_eq!(ana.state.friendships.view().await.sent_requests.len(), 1);
}

#[tokio::test]
async fn status_with_user() {
    let app = AppData::new().await;
    app.seed_friendship(7, CLEO, ANA, FriendshipStatus::Accepted);
    let ana = app.client(ANA);

    let status = ana.state.friendships.status_with(CLEO).await.unwrap();
    assert!(status.are_friends);
    assert!(!status.can_send_request);
    assert_eq!(status.friendship_id, Some(7));

    let status = ana.state.friendships.status_with(ZED).await.unwrap();
    assert!(!status.are_friends);
    assert!(status.can_send_request);
    assert_eq!(status.status, None);
}
