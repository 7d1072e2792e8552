pub mod http;
pub mod navigation;
pub mod notifications;
pub mod session;
