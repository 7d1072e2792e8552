pub mod dashboard;
pub mod friends;
pub mod groups;
pub mod messages;
