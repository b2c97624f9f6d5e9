/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::ApiErrorCodes;
use std::string::FromUtf8Error;
use std::time::SystemTimeError;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {0} returned: {1}")]
    HttpStatus(u16, String),

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Request token response did not confirm the callback")]
    CallbackNotConfirmed(),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("Response field missing: {0}")]
    MissingField(String),

    #[error("OAuth problem reported by provider: {0}")]
    OAuthProblem(String),

    #[error("Signing error. {0}")]
    Signing(String),

    #[error("System clock is before the Unix epoch")]
    Clock(#[from] SystemTimeError),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("XML deserialization error")]
    Xml(#[from] quick_xml::DeError),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Percent-decoded data is not UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),
}

impl FlickrError {
    /// Returns the known Flickr error code when this is a provider-side rejection.
    pub fn api_error_code(&self) -> Option<ApiErrorCodes> {
        match self {
            FlickrError::ApiResponse(code, _) => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }
}
