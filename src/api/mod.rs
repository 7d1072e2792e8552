pub mod dashboard;
pub mod flashcards;
pub mod friendships;
pub mod groups;
pub mod messages;
pub mod users;

use serde::de::IgnoredAny;
use validator::Validate;

use crate::{errors::ApiError, modules::http::HttpClient, modules::session::Session};

/// Typed wrappers over the backend endpoints, one borrowed sub-client per resource.
#[derive(Clone)]
pub struct SocialApi {
    http: HttpClient,
}

impl SocialApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    pub fn friendships(&self) -> friendships::Friendships<'_> {
        friendships::Friendships(&self.http)
    }

    pub fn groups(&self) -> groups::Groups<'_> {
        groups::Groups(&self.http)
    }

    pub fn messages(&self) -> messages::Messages<'_> {
        messages::Messages(&self.http)
    }

    pub fn social(&self) -> dashboard::Social<'_> {
        dashboard::Social(&self.http)
    }

    pub fn users(&self) -> users::Users<'_> {
        users::Users(&self.http)
    }

    pub fn flashcards(&self) -> flashcards::Flashcards<'_> {
        flashcards::Flashcards(&self.http)
    }
}

// Unit endpoints answer with nothing, `null` or a status message. Any of them means done.
fn acknowledged(res: Result<IgnoredAny, ApiError>) -> Result<(), ApiError> {
    res.map(|_| ())
}

// Form input is checked before anything goes out.
fn validated<T: Validate>(req: &T) -> Result<&T, ApiError> {
    req.validate()?;
    Ok(req)
}
