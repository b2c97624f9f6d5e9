/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Three-legged OAuth 1.0a flow.
//!
//! 1. [`OAuthFlow::request_token`] obtains temporary credentials.
//! 2. [`OAuthFlow::authorization_url`] builds the URL the user approves at.
//! 3. [`OAuthFlow::access_token`] trades the verifier for an [`Identity`].
//!
//! A failure at any step ends the flow; start again from step 1.

use crate::errors::FlickrError;
use crate::oauth::credentials::{Identity, OAuthToken, RequestToken};
use crate::oauth::injector::{OAUTH_CALLBACK, OAUTH_TOKEN, OAUTH_VERIFIER};
use crate::oauth::params::Params;
use crate::oauth::request::{HttpMethod, HttpRequest, RequestSigner};
use crate::rest::parsers::from_content;
use crate::rest::{ApiClient, Perms, Transport};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Callback value for flows where the user copies the verifier by hand.
pub const OUT_OF_BAND: &str = "oob";

const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
const OAUTH_CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";
const OAUTH_PROBLEM: &str = "oauth_problem";
const USER_NSID: &str = "user_nsid";
const USERNAME: &str = "username";
const FULLNAME: &str = "fullname";

/// Drives the token exchanges for one consumer.
#[derive(Debug)]
pub struct OAuthFlow<'a, T> {
    api_client: &'a ApiClient<T>,
}

impl<'a, T: Transport> OAuthFlow<'a, T> {
    pub(crate) fn new(api_client: &'a ApiClient<T>) -> Self {
        Self { api_client }
    }

    /// Step 1. `callback` is the redirect URL, or [`OUT_OF_BAND`].
    ///
    /// The provider must answer with `oauth_callback_confirmed=true`.
    pub async fn request_token(&self, callback: &str) -> Result<RequestToken, FlickrError> {
        let mut params = Params::new();
        params.push(OAUTH_CALLBACK, callback);

        let request = RequestSigner::new(self.api_client.creds()).sign(
            HttpMethod::Get,
            &self.api_client.endpoints().request_token,
            params,
        )?;
        debug!("Requesting OAuth request token");
        let fields = self.exchange(&request).await?;

        if fields.get(OAUTH_CALLBACK_CONFIRMED).map(String::as_str) != Some("true") {
            warn!("Request token response did not confirm the callback");
            return Err(FlickrError::CallbackNotConfirmed());
        }

        Ok(RequestToken {
            token: required_field(&fields, OAUTH_TOKEN)?,
            token_secret: required_field(&fields, OAUTH_TOKEN_SECRET)?,
        })
    }

    /// Step 2. Where to send the user to approve access at `perms`.
    pub fn authorization_url(
        &self,
        request_token: &RequestToken,
        perms: Perms,
    ) -> Result<String, FlickrError> {
        let url = Url::parse_with_params(
            &self.api_client.endpoints().authorize,
            &[
                (OAUTH_TOKEN, request_token.token.as_str()),
                ("perms", perms.into()),
            ],
        )?;
        Ok(url.into())
    }

    /// Step 3. Exchanges the request token and the verifier from the callback
    /// for a long-lived access token.
    pub async fn access_token(
        &self,
        request_token: &RequestToken,
        verifier: &str,
    ) -> Result<Identity, FlickrError> {
        let mut params = Params::new();
        params.push(OAUTH_VERIFIER, verifier);

        let request = RequestSigner::new(self.api_client.creds())
            .with_request_token(request_token)
            .sign(
                HttpMethod::Get,
                &self.api_client.endpoints().access_token,
                params,
            )?;
        debug!("Exchanging verifier for access token");
        let fields = self.exchange(&request).await?;

        Ok(Identity {
            token: OAuthToken {
                token: required_field(&fields, OAUTH_TOKEN)?,
                token_secret: required_field(&fields, OAUTH_TOKEN_SECRET)?,
            },
            user_id: required_field(&fields, USER_NSID)?,
            username: required_field(&fields, USERNAME)?,
            real_name: fields.get(FULLNAME).cloned().unwrap_or_default(),
        })
    }

    // Flickr reports rejected token requests as 401 with an `oauth_problem` body
    async fn exchange(&self, request: &HttpRequest) -> Result<HashMap<String, String>, FlickrError> {
        match self.api_client.transport().send(request).await {
            Ok(body) => parse_token_response(&body),
            Err(FlickrError::HttpStatus(status, body)) => match parse_token_response(&body) {
                Err(problem @ FlickrError::OAuthProblem(_)) => {
                    warn!("Token request rejected with {status}: {problem}");
                    Err(problem)
                }
                _ => Err(FlickrError::HttpStatus(status, body)),
            },
            Err(e) => Err(e),
        }
    }

    /// Asks Flickr which account and permission level an access token carries.
    pub async fn check_token(&self, token: &OAuthToken) -> Result<TokenCheck, FlickrError> {
        self.api_client
            .call::<CheckTokenResponse>(
                HttpMethod::Get,
                "flickr.auth.oauth.checkToken",
                Params::new(),
                Some(token),
            )
            .await
            .map(|v| v.oauth)
    }
}

/// Result of `flickr.auth.oauth.checkToken`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenCheck {
    #[serde(deserialize_with = "from_content")]
    pub token: String,

    #[serde(deserialize_with = "from_content")]
    pub perms: Perms,

    pub user: TokenUser,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenUser {
    pub nsid: String,

    pub username: String,

    #[serde(default)]
    pub fullname: String,
}

#[derive(Deserialize, Debug)]
struct CheckTokenResponse {
    oauth: TokenCheck,
}

/// Decodes a `key=value&...` token response. Empty bodies and bodies carrying
/// `oauth_problem` are errors.
pub(crate) fn parse_token_response(body: &str) -> Result<HashMap<String, String>, FlickrError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(FlickrError::ResponseMissing());
    }

    let fields: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    if let Some(problem) = fields.get(OAUTH_PROBLEM) {
        return Err(FlickrError::OAuthProblem(problem.clone()));
    }
    Ok(fields)
}

fn required_field(fields: &HashMap<String, String>, key: &str) -> Result<String, FlickrError> {
    fields
        .get(key)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| FlickrError::MissingField(key.to_string()))
}
