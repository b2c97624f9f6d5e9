/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Photo upload and replace.
//!
//! These go to the upload host rather than the REST endpoint, as multipart
//! POSTs. Only the text fields are signed; the photo bytes are not. Flickr
//! answers in XML regardless of the requested format.

use crate::errors::FlickrError;
use crate::oauth::{HttpMethod, Param, Params, RequestSigner};
use crate::rest::photos::join_tags;
use crate::rest::{ContentType, SafetyLevel, Session, Transport};
use bytes::Bytes;
use log::{debug, warn};
use serde::Deserialize;

const PHOTO_FIELD: &str = "photo";

/// File contents to send.
#[derive(Clone)]
pub struct UploadFile {
    pub data: Bytes,
    pub file_name: String,
    pub content_type: String,
}

impl UploadFile {
    pub fn new(
        data: impl Into<Bytes>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }

    fn into_param(self) -> Param {
        Param::binary(PHOTO_FIELD, self.data, self.file_name, self.content_type)
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("len", &self.data.len())
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Optional fields for a new upload. Unset fields take the account defaults.
#[derive(Debug, Clone, Default)]
pub struct UploadMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub is_public: Option<bool>,
    pub is_friend: Option<bool>,
    pub is_family: Option<bool>,
    pub safety_level: Option<SafetyLevel>,
    pub content_type: Option<ContentType>,
    /// Keep out of public searches.
    pub hidden: Option<bool>,
}

impl UploadMetadata {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("title", self.title.as_deref())
            .push_opt("description", self.description.as_deref());
        if !self.tags.is_empty() {
            params.push("tags", join_tags(&self.tags));
        }
        for (name, flag) in [
            ("is_public", self.is_public),
            ("is_friend", self.is_friend),
            ("is_family", self.is_family),
        ] {
            if let Some(flag) = flag {
                params.push_flag(name, flag);
            }
        }
        params
            .push_opt("safety_level", self.safety_level.map(|s| s as u8))
            .push_opt("content_type", self.content_type.map(|c| c as u8))
            // 2 hides, 1 shows
            .push_opt("hidden", self.hidden.map(|h| if h { 2 } else { 1 }));
        params
    }
}

/// Accessor for the upload and replace endpoints.
#[derive(Debug)]
pub struct Uploader<'a, T> {
    session: Session<'a, T>,
}

impl<'a, T: Transport> Uploader<'a, T> {
    pub(crate) fn new(session: Session<'a, T>) -> Self {
        Self { session }
    }

    /// Uploads a new photo and returns its id.
    pub async fn upload(
        &self,
        file: UploadFile,
        metadata: &UploadMetadata,
    ) -> Result<String, FlickrError> {
        let url = &self.session.api_client().endpoints().upload;
        self.send(url, metadata.to_params(), file).await
    }

    /// Replaces the image of an existing photo, keeping its metadata.
    pub async fn replace(&self, photo_id: &str, file: UploadFile) -> Result<String, FlickrError> {
        let mut params = Params::new();
        params.push("photo_id", photo_id);
        let url = &self.session.api_client().endpoints().replace;
        self.send(url, params, file).await
    }

    async fn send(
        &self,
        url: &str,
        params: Params,
        file: UploadFile,
    ) -> Result<String, FlickrError> {
        let token = self.session.require_token()?;
        let api_client = self.session.api_client();

        // Signed over the text fields first; the photo part is added after.
        let mut request = RequestSigner::new(api_client.creds())
            .with_token(token)
            .sign(HttpMethod::Post, url, params)?;
        debug!("Uploading {} to {url}", file.file_name);
        request.params.push_param(file.into_param());

        let body = api_client.transport().send(&request).await?;
        parse_upload_response(&body)
    }
}

#[derive(Deserialize, Debug)]
struct UploadResponse {
    #[serde(rename = "@stat")]
    stat: String,

    photoid: Option<UploadedPhoto>,

    err: Option<UploadError>,
}

#[derive(Deserialize, Debug)]
struct UploadedPhoto {
    #[serde(rename = "$text")]
    id: String,
}

#[derive(Deserialize, Debug)]
struct UploadError {
    #[serde(rename = "@code")]
    code: u32,

    #[serde(rename = "@msg")]
    msg: String,
}

/// Reads `<rsp stat="ok"><photoid>…</photoid></rsp>` or the `<err>` of a failure.
pub(crate) fn parse_upload_response(body: &str) -> Result<String, FlickrError> {
    let resp: UploadResponse = quick_xml::de::from_str(body)?;
    if resp.stat != "ok" {
        let err = resp.err.ok_or(FlickrError::ResponseMissing())?;
        warn!("Upload failed with {}: {}", err.code, err.msg);
        return Err(FlickrError::ApiResponse(err.code, err.msg));
    }
    resp.photoid
        .map(|p| p.id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| FlickrError::MissingField("photoid".into()))
}
