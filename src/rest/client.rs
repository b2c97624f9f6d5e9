/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::{ConsumerCreds, HttpMethod, OAuthFlow, OAuthToken, Params};
use crate::rest::{
    ApiClient, Endpoints, People, Photos, Photosets, ReqwestTransport, TestApi, Transport, Uploader,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Entry point for the library. Cheap to clone.
///
/// ```rust,no_run
/// use flickr::{Client, OAuthToken};
///
/// # async fn run() -> Result<(), flickr::FlickrError> {
/// let client = Client::new("api-key", "api-secret")?;
/// let token = OAuthToken::new("access-token", "access-token-secret");
/// let me = client.session(Some(&token)).test().login().await?;
/// println!("Logged in as {}", me.username);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T = ReqwestTransport> {
    api_client: Arc<ApiClient<T>>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            api_client: self.api_client.clone(),
        }
    }
}

impl Client {
    /// Client for the production Flickr endpoints.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Result<Self, FlickrError> {
        Ok(Self::with_transport(
            ConsumerCreds::new(consumer_key, consumer_secret)?,
            Endpoints::default(),
            ReqwestTransport::new(),
        ))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(creds: ConsumerCreds, endpoints: Endpoints, transport: T) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds, endpoints, transport)),
        }
    }

    /// Lower level interface for making raw REST calls.
    pub fn api_client(&self) -> &ApiClient<T> {
        &self.api_client
    }

    /// The three-legged authorization flow.
    pub fn oauth(&self) -> OAuthFlow<'_, T> {
        OAuthFlow::new(&self.api_client)
    }

    /// Calls made through the session are signed with `token` when one is
    /// given, and sent with just the API key otherwise.
    pub fn session<'a>(&'a self, token: Option<&'a OAuthToken>) -> Session<'a, T> {
        Session {
            api_client: &self.api_client,
            token,
        }
    }
}

/// A client paired with the credential for a run of calls.
#[derive(Debug)]
pub struct Session<'a, T> {
    api_client: &'a ApiClient<T>,
    token: Option<&'a OAuthToken>,
}

impl<T> Clone for Session<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Session<'_, T> {}

impl<'a, T: Transport> Session<'a, T> {
    pub fn token(&self) -> Option<&'a OAuthToken> {
        self.token
    }

    pub fn test(self) -> TestApi<'a, T> {
        TestApi::new(self)
    }

    pub fn people(self) -> People<'a, T> {
        People::new(self)
    }

    pub fn photos(self) -> Photos<'a, T> {
        Photos::new(self)
    }

    pub fn photosets(self) -> Photosets<'a, T> {
        Photosets::new(self)
    }

    pub fn upload(self) -> Uploader<'a, T> {
        Uploader::new(self)
    }

    pub(crate) fn api_client(&self) -> &'a ApiClient<T> {
        self.api_client
    }

    /// Write methods and uploads need an access token.
    pub(crate) fn require_token(&self) -> Result<&'a OAuthToken, FlickrError> {
        self.token.ok_or(FlickrError::MissingConfig("access token"))
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<R, FlickrError> {
        self.api_client
            .call(HttpMethod::Get, method, params, self.token)
            .await
    }

    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<R, FlickrError> {
        let token = self.require_token()?;
        self.api_client
            .call(HttpMethod::Post, method, params, Some(token))
            .await
    }
}

// Payload-free success responses
#[derive(serde::Deserialize, Debug)]
pub(crate) struct Empty {}
