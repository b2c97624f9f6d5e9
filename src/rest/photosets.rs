/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::Params;
use crate::rest::client::Empty;
use crate::rest::macros::{obj_from_method, obj_from_write_method, stream_photo_pages};
use crate::rest::parsers::{from_content, from_str_or_num, from_unix_time};
use crate::rest::{PhotoSummary, Session, Transport};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Holds information returned from `flickr.photosets.getInfo` and `getList`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct Photoset {
    pub id: String,

    #[serde(default)]
    pub owner: String,

    pub primary: String,

    pub secret: String,

    pub server: String,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub farm: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub photos: u32,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub videos: u32,

    #[serde(deserialize_with = "from_content")]
    pub title: String,

    #[serde(deserialize_with = "from_content")]
    pub description: String,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub count_views: u64,

    #[serde(deserialize_with = "from_unix_time")]
    pub date_create: DateTime<Utc>,

    #[serde(deserialize_with = "from_unix_time")]
    pub date_update: DateTime<Utc>,
}

impl Photoset {
    /// Album page on flickr.com.
    pub fn page_url(&self) -> String {
        format!(
            "https://www.flickr.com/photos/{}/albums/{}",
            self.owner, self.id
        )
    }
}

impl PartialEq for Photoset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Photoset {}

impl Hash for Photoset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Photoset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "title: {}, id: {}, photos: {}",
            self.title, self.id, self.photos
        )
    }
}

/// One page of a user's photosets.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotosetList {
    #[serde(deserialize_with = "from_str_or_num")]
    pub page: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub pages: u32,

    #[serde(rename = "perpage", deserialize_with = "from_str_or_num")]
    pub per_page: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub total: u64,

    #[serde(rename = "photoset", default)]
    pub photosets: Vec<Photoset>,
}

/// One page of the photos in a photoset.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotosetPhotos {
    pub id: String,

    pub primary: String,

    pub owner: String,

    #[serde(rename = "ownername", default)]
    pub owner_name: String,

    #[serde(default)]
    pub title: String,

    #[serde(deserialize_with = "from_str_or_num")]
    pub page: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub pages: u32,

    #[serde(rename = "perpage", deserialize_with = "from_str_or_num")]
    pub per_page: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub total: u64,

    #[serde(rename = "photo", default)]
    pub photos: Vec<PhotoSummary>,
}

/// Result of `flickr.photosets.create`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedPhotoset {
    pub id: String,
    pub url: String,
}

/// Accessor for the `flickr.photosets` namespace.
#[derive(Debug)]
pub struct Photosets<'a, T> {
    session: Session<'a, T>,
}

impl<'a, T: Transport> Photosets<'a, T> {
    pub(crate) fn new(session: Session<'a, T>) -> Self {
        Self { session }
    }

    /// Photosets owned by `user_id`, or by the token owner when `None`.
    pub async fn get_list(
        &self,
        user_id: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosetList, FlickrError> {
        let mut params = Params::new();
        params
            .push_opt("user_id", user_id)
            .push("page", page)
            .push("per_page", per_page);
        obj_from_method!(self.session, "flickr.photosets.getList", params, PhotosetListResponse, photosets)
    }

    pub async fn get_info(&self, photoset_id: &str) -> Result<Photoset, FlickrError> {
        let mut params = Params::new();
        params.push("photoset_id", photoset_id);
        obj_from_method!(self.session, "flickr.photosets.getInfo", params, PhotosetResponse, photoset)
    }

    /// One page of the photos in a set.
    pub async fn get_photos(
        &self,
        photoset_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosetPhotos, FlickrError> {
        let mut params = Params::new();
        params
            .push("photoset_id", photoset_id)
            .push("page", page)
            .push("per_page", per_page);
        obj_from_method!(self.session, "flickr.photosets.getPhotos", params, PhotosetPhotosResponse, photoset)
    }

    /// Every photo in a set, fetched one page at a time as the stream is polled.
    pub fn photos_stream(
        &self,
        photoset_id: &str,
    ) -> impl Stream<Item = Result<PhotoSummary, FlickrError>> + use<'a, T> {
        let mut params = Params::new();
        params.push("photoset_id", photoset_id);
        stream_photo_pages!(
            self.session,
            "flickr.photosets.getPhotos",
            params,
            PhotosetPhotosResponse,
            photoset
        )
    }

    /// Creates a set with `primary_photo_id` as its cover.
    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        primary_photo_id: &str,
    ) -> Result<CreatedPhotoset, FlickrError> {
        let mut params = Params::new();
        params
            .push("title", title)
            .push_opt("description", description)
            .push("primary_photo_id", primary_photo_id);
        obj_from_write_method!(self.session, "flickr.photosets.create", params, CreatedResponse, photoset)
    }

    pub async fn add_photo(&self, photoset_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        self.edit("flickr.photosets.addPhoto", photoset_id, Some(photo_id))
            .await
    }

    pub async fn remove_photo(&self, photoset_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        self.edit("flickr.photosets.removePhoto", photoset_id, Some(photo_id))
            .await
    }

    /// Deletes the set. Its photos are kept.
    pub async fn delete(&self, photoset_id: &str) -> Result<(), FlickrError> {
        self.edit("flickr.photosets.delete", photoset_id, None).await
    }

    async fn edit(
        &self,
        method: &str,
        photoset_id: &str,
        photo_id: Option<&str>,
    ) -> Result<(), FlickrError> {
        let mut params = Params::new();
        params
            .push("photoset_id", photoset_id)
            .push_opt("photo_id", photo_id);
        self.session.post::<Empty>(method, params).await.map(|_| ())
    }
}

// Expected response from flickr.photosets.getList
#[derive(Deserialize, Debug)]
struct PhotosetListResponse {
    photosets: PhotosetList,
}

// Expected response from flickr.photosets.getInfo
#[derive(Deserialize, Debug)]
struct PhotosetResponse {
    photoset: Photoset,
}

// Expected response from flickr.photosets.getPhotos
#[derive(Deserialize, Debug)]
struct PhotosetPhotosResponse {
    photoset: PhotosetPhotos,
}

// Expected response from flickr.photosets.create
#[derive(Deserialize, Debug)]
struct CreatedResponse {
    photoset: CreatedPhotoset,
}
