use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Session expired")]
    Unauthorized,
    #[error("No session token stored")]
    MissingSession,
    #[error("{status} - {message}")]
    Client { status: StatusCode, message: String },
    #[error("{status} - {message}")]
    Server { status: StatusCode, message: String },
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid input")]
    Validation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

// Backends disagree on the field name, accept all of them.
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    error_info: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .or(self.error_info)
            .filter(|m| !m.trim().is_empty())
    }
}

impl ApiError {
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return Self::Unauthorized;
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        if status.is_server_error() {
            error!("Server error {status}: {message}");
            Self::Server { status, message }
        } else {
            debug!("Request rejected {status}: {message}");
            Self::Client { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Unable to reach the server".into(),
            Self::Unauthorized => "Your session has expired, please log in again".into(),
            Self::MissingSession => "You are not logged in".into(),
            Self::Client { message, .. } | Self::Server { message, .. } => message.clone(),
            Self::Decode(_) => "Unexpected response from the server".into(),
            Self::Validation(errors) => validation_message(errors),
            Self::Unexpected(_) => "Unexpected error".into(),
        }
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .collect::<Vec<String>>();
    messages.sort();
    if messages.is_empty() {
        return "Invalid input".into();
    }
    messages.join(", ")
}
