//! Authentication Seam
//!
//! The editor never knows how a session is established. The host picks an
//! `Authenticator` and the app passes it through context to whoever needs it
//! (the session bar and the remote client).

use std::sync::Arc;

use crate::config::{AppConfig, AuthMode};

pub trait Authenticator: Send + Sync {
    /// Display name of the signed-in user, if any
    fn current_user(&self) -> Option<String>;

    /// Headers to attach to remote API requests
    fn request_headers(&self) -> Vec<(String, String)>;
}

pub type SharedAuthenticator = Arc<dyn Authenticator>;

/// No identity, no credentials
#[derive(Debug, Default)]
pub struct AnonymousAuthenticator;

impl Authenticator for AnonymousAuthenticator {
    fn current_user(&self) -> Option<String> {
        None
    }

    fn request_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Shared API key sent as `x-api-key`
#[derive(Debug)]
pub struct ApiKeyAuthenticator {
    api_key: String,
}

impl ApiKeyAuthenticator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}

impl Authenticator for ApiKeyAuthenticator {
    /// A shared key identifies the app, not a person
    fn current_user(&self) -> Option<String> {
        None
    }

    fn request_headers(&self) -> Vec<(String, String)> {
        vec![("x-api-key".to_string(), self.api_key.clone())]
    }
}

/// Pick the authenticator matching the configured API auth mode
pub fn from_config(config: &AppConfig) -> SharedAuthenticator {
    match config.api.as_ref() {
        Some(api) if api.auth_mode == AuthMode::ApiKey => {
            let key = api.api_key.clone().unwrap_or_default();
            Arc::new(ApiKeyAuthenticator::new(key))
        }
        _ => Arc::new(AnonymousAuthenticator),
    }
}
