use anyhow::anyhow;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    configuration::ApplicationSettings,
    errors::ApiError,
    modules::{navigation::Navigator, session::Session},
};

/// Authenticated json client for the backend.
///
/// Every call carries the session's bearer token. A 401 answer logs the
/// session out and sends the user to the login route before the error is
/// returned, so callers never have to handle expiry themselves.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    app: Arc<ApplicationSettings>,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(
        app: ApplicationSettings,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(app.user_agent.as_str()).build()?;
        Ok(Self {
            client,
            app: Arc::new(app),
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.request(Method::GET, self.url(split(path))?)?;
        self.send(req).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::GET, self.url(split(path))?)?.query(query);
        self.send(req).await
    }

    /// Like [`HttpClient::get`] for paths built from free text, each segment is escaped.
    pub async fn get_segments<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let req = self.request(Method::GET, self.url(segments.iter().copied())?)?;
        self.send(req).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, self.url(split(path))?)?.json(body);
        self.send(req).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.request(Method::POST, self.url(split(path))?)?;
        self.send(req).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PUT, self.url(split(path))?)?.json(body);
        self.send(req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.request(Method::DELETE, self.url(split(path))?)?;
        self.send(req).await
    }

    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.app.base_url)
            .map_err(|e| anyhow!("Invalid base url '{}': {e}", self.app.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base url '{}' cannot carry a path", self.app.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingSession)?;
        debug!("{method} {url}");
        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }

        decode(&body)
    }

    fn expire_session(&self) {
        warn!("Session rejected by the server, logging out");
        self.session.logout();
        self.navigator.navigate(&self.app.login_path);
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

// Mutations often answer with an empty body.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_str(body)?)
}
