use tracing::warn;

use super::models::{Friend, Friendship, FriendshipStatus, FriendshipView};
use crate::models::UserId;

/// Splits the current user's friendship records into friends, received and sent requests.
///
/// A pending record is received when `me` is the addressee and sent when `me` is the
/// requester. Records that do not involve `me`, and declined or blocked ones, are left out,
/// so the three lists never share a record.
pub fn partition(records: &[Friendship], me: UserId) -> FriendshipView {
    let mut view = FriendshipView::default();

    for record in records {
        match record.status {
            FriendshipStatus::Accepted => match record.other_party(me) {
                Some(other) => view.friends.push(Friend {
                    friendship_id: record.id,
                    user: other.clone(),
                    since: record.created_at,
                }),
                None => warn!("Friendship {} does not involve user {me}", record.id),
            },
            FriendshipStatus::Pending if record.addressee.id == me => {
                view.pending_requests.push(record.clone())
            }
            FriendshipStatus::Pending if record.requester.id == me => {
                view.sent_requests.push(record.clone())
            }
            FriendshipStatus::Pending => {
                warn!("Pending friendship {} does not involve user {me}", record.id)
            }
            _ => (),
        }
    }

    view
}
