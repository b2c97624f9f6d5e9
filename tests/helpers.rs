/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr::oauth::{ConsumerCreds, HttpRequest, OAuthToken};
use flickr::{Client, Endpoints, FlickrError, Transport};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

pub(crate) const CONSUMER_KEY: &str = "653e7a6ecc1d528c516cc8f92cf98611";
pub(crate) const CONSUMER_SECRET: &str = "2c6f4f1a9b7d3e05";

/// Replays canned bodies in order and records every request it is given.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<String, (u16, String)>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub(crate) fn respond(&self, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string()));
        self
    }

    pub(crate) fn fail(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err((status, body.to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for FakeTransport {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<String, FlickrError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left");
        async move { next.map_err(|(status, body)| FlickrError::HttpStatus(status, body)) }
    }
}

#[allow(dead_code)]
pub(crate) fn fake_client() -> (Client<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::default();
    let creds = ConsumerCreds::new(CONSUMER_KEY, CONSUMER_SECRET).unwrap();
    let client = Client::with_transport(creds, Endpoints::default(), transport.clone());
    (client, transport)
}

#[allow(dead_code)]
pub(crate) fn access_token() -> OAuthToken {
    OAuthToken::new("72157626318069415-087bfc7b5816092c", "a202d1f853ec69de")
}

#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<(Client, Option<OAuthToken>)> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let token = match (
        std::env::var("FLICKR_ACCESS_TOKEN"),
        std::env::var("FLICKR_ACCESS_TOKEN_SECRET"),
    ) {
        (Ok(token), Ok(secret)) => Some(OAuthToken::new(&token, &secret)),
        _ => None,
    };
    Ok((Client::new(&api_key, &api_secret)?, token))
}
