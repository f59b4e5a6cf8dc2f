//! Transport options for broker requests
//!
//! A broker source carries its options as a flat string map. The keys
//! understood here are [`USERNAME_OPTION`] / [`PASSWORD_OPTION`] for HTTP basic
//! authentication and [`TOKEN_OPTION`] for bearer authentication. Other keys
//! are ignored.

use crate::error::{
    BrokerClientError,
    Result,
};
use reqwest::blocking::RequestBuilder;
use std::{
    collections::BTreeMap,
    fmt,
};

pub const USERNAME_OPTION: &str = "username";
pub const PASSWORD_OPTION: &str = "password";
pub const TOKEN_OPTION: &str = "token";

/// Credentials attached to every broker request.
#[derive(Clone, PartialEq, Eq)]
pub enum BrokerAuth {
    Basic { username: String, password: String },
    Bearer(String),
}

// Hand-written so credentials never end up in logs.
impl fmt::Debug for BrokerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokerAuth::Basic { username, .. } => {
                f.debug_struct("Basic")
                    .field("username", username)
                    .field("password", &"***")
                    .finish()
            }
            BrokerAuth::Bearer(_) => f.debug_tuple("Bearer").field(&"***").finish(),
        }
    }
}

impl BrokerAuth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            BrokerAuth::Basic { username, password } => request.basic_auth(username, Some(password)),
            BrokerAuth::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Parsed transport options for a [`crate::PactBrokerClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerClientOptions {
    auth: Option<BrokerAuth>,
}

impl BrokerClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(mut self, auth: BrokerAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn auth(&self) -> Option<&BrokerAuth> {
        self.auth.as_ref()
    }

    /// Parses the option map carried by a broker source.
    pub fn from_map(options: &BTreeMap<String, String>) -> Result<Self> {
        let username = options.get(USERNAME_OPTION);
        let password = options.get(PASSWORD_OPTION);
        let token = options.get(TOKEN_OPTION);

        let auth = match (username, password, token) {
            (None, None, None) => None,
            (Some(_), _, Some(_)) => {
                return Err(BrokerClientError::InvalidOption(
                    "use either username/password or token, not both".to_string(),
                ));
            }
            (None, Some(_), _) => {
                return Err(BrokerClientError::InvalidOption(
                    "password given without username".to_string(),
                ));
            }
            (Some(_), None, None) => {
                return Err(BrokerClientError::InvalidOption(
                    "username given without password".to_string(),
                ));
            }
            (Some(username), Some(password), None) => {
                if username.trim().is_empty() {
                    return Err(BrokerClientError::InvalidOption(
                        "username cannot be empty".to_string(),
                    ));
                }
                Some(BrokerAuth::Basic {
                    username: username.clone(),
                    password: password.clone(),
                })
            }
            (None, None, Some(token)) => {
                if token.trim().is_empty() {
                    return Err(BrokerClientError::InvalidOption(
                        "token cannot be empty or whitespace".to_string(),
                    ));
                }
                Some(BrokerAuth::Bearer(token.clone()))
            }
        };

        Ok(Self { auth })
    }

    /// Adds the configured credentials, if any, to `request`.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(auth) => auth.apply(request),
            None => request,
        }
    }
}
