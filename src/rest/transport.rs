/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::{HttpMethod, HttpRequest, ParamValue, Params};
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use std::future::Future;

/// Sends a fully built request and returns the raw response body.
///
/// Implementations do one round trip per call: no retries, no backoff.
/// Non-2xx statuses are errors.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<String, FlickrError>> + Send;
}

/// [`Transport`] over a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    https_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse a preconfigured client (timeouts, proxies, user agent).
    pub fn from_client(https_client: reqwest::Client) -> Self {
        Self { https_client }
    }

    fn build(&self, request: &HttpRequest) -> Result<reqwest::RequestBuilder, FlickrError> {
        let builder = match request.method {
            HttpMethod::Get => self.https_client.get(request.query_url()?),
            HttpMethod::Post if request.params.has_binary() => self
                .https_client
                .post(&request.url)
                .multipart(multipart_form(&request.params)?),
            HttpMethod::Post => self
                .https_client
                .post(&request.url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.form_body()),
        };
        Ok(builder.header(ACCEPT, "application/json"))
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<String, FlickrError>> + Send {
        let builder = self.build(request);
        let url = request.url.clone();
        async move {
            let resp = builder?.send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            debug!("{url} answered {status}");
            if !status.is_success() {
                return Err(FlickrError::HttpStatus(status.as_u16(), body));
            }
            Ok(body)
        }
    }
}

// Text fields become text parts; binary fields become file parts.
fn multipart_form(params: &Params) -> Result<Form, FlickrError> {
    let mut form = Form::new();
    for param in params {
        form = match &param.value {
            ParamValue::Text(value) => form.text(param.name.clone(), value.clone()),
            ParamValue::Binary(binary) => form.part(
                param.name.clone(),
                Part::bytes(binary.data.to_vec())
                    .file_name(binary.file_name.clone())
                    .mime_str(&binary.content_type)?,
            ),
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::Param;

    fn request(method: HttpMethod, params: Params) -> HttpRequest {
        HttpRequest {
            method,
            url: "https://api.flickr.com/services/rest/".into(),
            params,
        }
    }

    #[test]
    fn get_puts_fields_in_query() {
        let params: Params = [("method", "flickr.test.echo"), ("q", "a b")].into_iter().collect();
        let built = ReqwestTransport::new()
            .build(&request(HttpMethod::Get, params))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(built.method(), reqwest::Method::GET);
        assert_eq!(built.url().query(), Some("method=flickr.test.echo&q=a+b"));
    }

    #[test]
    fn post_without_binary_is_form_encoded() {
        let params: Params = [("title", "x y")].into_iter().collect();
        let built = ReqwestTransport::new()
            .build(&request(HttpMethod::Post, params))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            built.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            built.body().and_then(|b| b.as_bytes()),
            Some("title=x+y".as_bytes())
        );
    }

    #[test]
    fn post_with_binary_is_multipart() {
        let mut params = Params::new();
        params
            .push("title", "x")
            .push_param(Param::binary("photo", vec![1_u8, 2], "a.jpg", "image/jpeg"));
        let built = ReqwestTransport::new()
            .build(&request(HttpMethod::Post, params))
            .unwrap()
            .build()
            .unwrap();
        let content_type = built.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn bad_content_type_is_rejected() {
        let mut params = Params::new();
        params.push_param(Param::binary("photo", vec![1_u8], "a.jpg", "not a mime"));
        assert!(
            ReqwestTransport::new()
                .build(&request(HttpMethod::Post, params))
                .is_err()
        );
    }
}
