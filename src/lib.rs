pub mod api;
pub mod configuration;
pub mod errors;
pub mod models;
pub mod modules;
pub mod state;
pub mod utils;

pub use api::SocialApi;
pub use errors::ApiError;
pub use state::{SocialState, Status};
