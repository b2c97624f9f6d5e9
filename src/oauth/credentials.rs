/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use std::fmt;

/// Application key/secret issued by Flickr.
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerCreds {
    pub(crate) key: String,
    pub(crate) secret: String,
}

impl ConsumerCreds {
    /// Both values are required; blank values are rejected here rather than at
    /// the first signed call.
    pub fn new(key: &str, secret: &str) -> Result<Self, FlickrError> {
        if key.trim().is_empty() {
            return Err(FlickrError::MissingConfig("consumer key"));
        }
        if secret.trim().is_empty() {
            return Err(FlickrError::MissingConfig("consumer secret"));
        }
        Ok(Self {
            key: key.into(),
            secret: secret.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ConsumerCreds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerCreds")
            .field("key", &self.key)
            .field("secret", &"xxx")
            .finish()
    }
}

/// Access token and secret for an authorized user.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OAuthToken {
    pub token: String,
    pub token_secret: String,
}

impl OAuthToken {
    pub fn new(token: &str, token_secret: &str) -> Self {
        Self {
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("token", &self.token)
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// Temporary credentials returned by the request-token step. Only good for
/// building the authorization URL and the access-token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestToken {
    pub token: String,
    pub token_secret: String,
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestToken")
            .field("token", &self.token)
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// An access token together with the account that granted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub token: OAuthToken,
    pub user_id: String,
    pub username: String,
    pub real_name: String,
}
