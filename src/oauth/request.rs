/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::base_string::signature_base_string;
use crate::oauth::credentials::{ConsumerCreds, OAuthToken, RequestToken};
use crate::oauth::encoding::form_encode;
use crate::oauth::injector::{OAUTH_SIGNATURE, inject};
use crate::oauth::params::Params;
use crate::oauth::signer::sign;
use log::trace;
use strum_macros::{Display, IntoStaticStr};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum HttpMethod {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A request ready for the transport: every field, signature included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub params: Params,
}

impl HttpRequest {
    /// URL with the text fields form-encoded into the query string.
    pub fn query_url(&self) -> Result<Url, FlickrError> {
        Ok(Url::parse_with_params(&self.url, self.params.text_pairs())?)
    }

    /// `application/x-www-form-urlencoded` body of the text fields.
    pub fn form_body(&self) -> String {
        self.params
            .text_pairs()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Signs one request with the consumer secret and, when present, a token secret.
///
/// The credential is always handed in by the caller; nothing is read from
/// shared state.
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    consumer: &'a ConsumerCreds,
    token: Option<&'a str>,
    token_secret: Option<&'a str>,
}

impl<'a> RequestSigner<'a> {
    /// Signer for the request-token step: no token, empty token secret.
    pub fn new(consumer: &'a ConsumerCreds) -> Self {
        Self {
            consumer,
            token: None,
            token_secret: None,
        }
    }

    pub fn with_token(mut self, token: &'a OAuthToken) -> Self {
        self.token = Some(&token.token);
        self.token_secret = Some(&token.token_secret);
        self
    }

    /// Used for the access-token exchange, signed with the request token secret.
    pub fn with_request_token(mut self, token: &'a RequestToken) -> Self {
        self.token = Some(&token.token);
        self.token_secret = Some(&token.token_secret);
        self
    }

    /// Injects the `oauth_*` fields, signs, and appends `oauth_signature`.
    pub fn sign(
        &self,
        method: HttpMethod,
        url: &str,
        params: Params,
    ) -> Result<HttpRequest, FlickrError> {
        let (url, mut params) = split_query(url, params)?;
        params.remove(OAUTH_SIGNATURE);
        inject(&mut params, &self.consumer.key, self.token)?;

        let base_string = signature_base_string(method, &url, &params)?;
        trace!("Signature base string: {base_string}");
        let signature = sign(&base_string, &self.consumer.secret, self.token_secret)?;
        params.push(OAUTH_SIGNATURE, signature);

        Ok(HttpRequest {
            method,
            url,
            params,
        })
    }
}

// Query pairs on the URL are request parameters and must be signed with the
// rest, so they move into the parameter list ahead of the caller's fields.
fn split_query(url: &str, params: Params) -> Result<(String, Params), FlickrError> {
    let mut parsed = Url::parse(url)?;
    if parsed.query().is_none() && parsed.fragment().is_none() {
        return Ok((url.to_string(), params));
    }

    let mut merged: Params = parsed.query_pairs().into_owned().collect();
    for param in params {
        merged.push_param(param);
    }
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok((parsed.into(), merged))
}
