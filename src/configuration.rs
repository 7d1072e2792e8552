use config::{Config, ConfigError};
use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::modules::session::{FileSessionStore, MemorySessionStore, Session};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_USER_AGENT: &str = "social-client";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApplicationSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    fn from_env() -> Self {
        Self {
            base_url: try_get_env("API_BASE_URL").unwrap_or_else(default_base_url),
            login_path: try_get_env("LOGIN_PATH").unwrap_or_else(default_login_path),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct SessionSettings {
    pub token: Option<Secret<String>>,
    pub user_id: Option<i64>,
    pub storage_path: Option<PathBuf>,
}

impl SessionSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let user_id = match try_get_env("SESSION_USER_ID") {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                ConfigError::Message(format!("SESSION_USER_ID '{raw}' is not a number"))
            })?),
            None => None,
        };
        Ok(Self {
            token: try_get_secret_env("SESSION_TOKEN"),
            user_id,
            storage_path: try_get_env("SESSION_PATH").map(PathBuf::from),
        })
    }
}

impl Settings {
    /// Opens the configured session storage and seeds it with the configured token, if any.
    pub fn session(&self) -> Session {
        let session = match &self.session.storage_path {
            Some(path) => {
                info!("Using file session storage at {}", path.display());
                Session::new(FileSessionStore::new(path.clone()))
            }
            None => {
                info!("Using in-memory session storage");
                Session::new(MemorySessionStore::default())
            }
        };

        if let Some(token) = &self.session.token {
            session.login(token.clone(), self.session.user_id);
        }
        session
    }
}

enum Environment {
    Local,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not supported environment. Use either `local` or `production`"
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let environment: Environment = match std::env::var("APP_ENVIRONMENT") {
        Ok(env) => env.try_into().map_err(ConfigError::Message)?,
        Err(_) => Environment::Local,
    };

    match environment {
        Environment::Local => {
            let base_path = std::env::current_dir()
                .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
            let config_dir = base_path.join("configuration");

            let settings = Config::builder()
                .add_source(config::File::from(config_dir.join("settings.toml")).required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__"),
                )
                .set_default("app.base_url", DEFAULT_BASE_URL)?;
            settings.build()?.try_deserialize()
        }

        Environment::Production => Ok(Settings {
            app: ApplicationSettings::from_env(),
            session: SessionSettings::from_env()?,
        }),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.into()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn try_get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn try_get_secret_env(name: &str) -> Option<Secret<String>> {
    Some(Secret::from(try_get_env(name)?))
}
