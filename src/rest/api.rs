/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::{ConsumerCreds, HttpMethod, HttpRequest, OAuthToken, Params, RequestSigner};
use crate::rest::Transport;
use log::{debug, warn};
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// Production Flickr endpoints
pub const REST_ENDPOINT: &str = "https://api.flickr.com/services/rest/";
pub const UPLOAD_ENDPOINT: &str = "https://up.flickr.com/services/upload/";
pub const REPLACE_ENDPOINT: &str = "https://up.flickr.com/services/replace/";
pub const REQUEST_TOKEN_ENDPOINT: &str = "https://www.flickr.com/services/oauth/request_token";
pub const AUTHORIZE_ENDPOINT: &str = "https://www.flickr.com/services/oauth/authorize";
pub const ACCESS_TOKEN_ENDPOINT: &str = "https://www.flickr.com/services/oauth/access_token";

/// Where each kind of request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub rest: String,
    pub upload: String,
    pub replace: String,
    pub request_token: String,
    pub authorize: String,
    pub access_token: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: REST_ENDPOINT.into(),
            upload: UPLOAD_ENDPOINT.into(),
            replace: REPLACE_ENDPOINT.into(),
            request_token: REQUEST_TOKEN_ENDPOINT.into(),
            authorize: AUTHORIZE_ENDPOINT.into(),
            access_token: ACCESS_TOKEN_ENDPOINT.into(),
        }
    }
}

impl Endpoints {
    /// Same paths as production, all served from `origin`.
    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            rest: format!("{origin}/services/rest/"),
            upload: format!("{origin}/services/upload/"),
            replace: format!("{origin}/services/replace/"),
            request_token: format!("{origin}/services/oauth/request_token"),
            authorize: format!("{origin}/services/oauth/authorize"),
            access_token: format!("{origin}/services/oauth/access_token"),
        }
    }
}

/// Directly communicates with the API.
pub struct ApiClient<T> {
    creds: ConsumerCreds,
    endpoints: Endpoints,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(creds: ConsumerCreds, endpoints: Endpoints, transport: T) -> Self {
        Self {
            creds,
            endpoints,
            transport,
        }
    }

    pub fn creds(&self) -> &ConsumerCreds {
        &self.creds
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request for a REST method.
    ///
    /// With a token the request is OAuth signed. Without one it carries
    /// `api_key` and is sent unsigned, which Flickr accepts for public methods.
    pub fn prepare(
        &self,
        http_method: HttpMethod,
        method: &str,
        mut params: Params,
        token: Option<&OAuthToken>,
    ) -> Result<HttpRequest, FlickrError> {
        params
            .push("method", method)
            .push("format", "json")
            .push("nojsoncallback", 1);

        match token {
            Some(token) => RequestSigner::new(&self.creds).with_token(token).sign(
                http_method,
                &self.endpoints.rest,
                params,
            ),
            None => {
                params.push("api_key", &self.creds.key);
                Ok(HttpRequest {
                    method: http_method,
                    url: self.endpoints.rest.clone(),
                    params,
                })
            }
        }
    }

    /// Performs a REST call and decodes the JSON payload.
    pub async fn call<R: DeserializeOwned>(
        &self,
        http_method: HttpMethod,
        method: &str,
        params: Params,
        token: Option<&OAuthToken>,
    ) -> Result<R, FlickrError> {
        let request = self.prepare(http_method, method, params, token)?;
        debug!("{http_method} {method} signed: {}", token.is_some());
        let body = self.transport.send(&request).await?;
        parse_rest_response(method, &body)
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

/// Error codes per the Flickr API docs. Shared by every method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrl = 116,
}

// Status fields present on every JSON response
#[derive(Deserialize, Debug)]
struct ResponseStatus {
    stat: String,

    #[serde(default)]
    code: u32,

    #[serde(default)]
    message: String,
}

/// Checks `stat` and decodes the rest of the body into `R`.
pub(crate) fn parse_rest_response<R: DeserializeOwned>(
    method: &str,
    body: &str,
) -> Result<R, FlickrError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(FlickrError::ApiResponseMalformed)?;
    let status = ResponseStatus::deserialize(&value).map_err(FlickrError::ApiResponseMalformed)?;
    if status.stat != "ok" {
        warn!("{method} failed with {}: {}", status.code, status.message);
        return Err(FlickrError::ApiResponse(status.code, status.message));
    }
    Ok(serde_json::from_value(value)?)
}
