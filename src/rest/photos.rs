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
use crate::rest::macros::{obj_from_method, stream_photo_pages};
use crate::rest::parsers::{
    from_content, from_empty_str_to_none, from_flickr_datetime, from_int_bool, from_str_or_num,
    from_unix_time,
};
use crate::rest::people::PhotosResponse;
use crate::rest::{
    ContentType, PhotoSize, PrivacyFilter, SafetyLevel, Session, SortOrder, Transport,
};
use async_stream::try_stream;
use chrono::{DateTime, NaiveDateTime, Utc};
use futures::Stream;
use serde::Deserialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A photo as it appears in list results (search, user photos, photoset photos).
#[derive(Deserialize, Debug, Clone)]
pub struct PhotoSummary {
    pub id: String,

    #[serde(default)]
    pub owner: String,

    pub secret: String,

    pub server: String,

    #[serde(deserialize_with = "from_str_or_num")]
    pub farm: u32,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "ispublic", default, deserialize_with = "from_int_bool")]
    pub is_public: bool,

    #[serde(rename = "isfriend", default, deserialize_with = "from_int_bool")]
    pub is_friend: bool,

    #[serde(rename = "isfamily", default, deserialize_with = "from_int_bool")]
    pub is_family: bool,
}

impl PhotoSummary {
    /// Static image URL for the requested size.
    pub fn source_url(&self, size: PhotoSize) -> String {
        source_url(&self.server, &self.id, &self.secret, size)
    }

    /// Photo page on flickr.com.
    pub fn page_url(&self) -> String {
        format!("https://www.flickr.com/photos/{}/{}", self.owner, self.id)
    }
}

impl PartialEq for PhotoSummary {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for PhotoSummary {}

impl Hash for PhotoSummary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for PhotoSummary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhotoSummary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for PhotoSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "title: {}, id: {}", self.title, self.id)
    }
}

fn source_url(server: &str, id: &str, secret: &str, size: PhotoSize) -> String {
    match size.suffix() {
        "" => format!("https://live.staticflickr.com/{server}/{id}_{secret}.jpg"),
        suffix => format!("https://live.staticflickr.com/{server}/{id}_{secret}_{suffix}.jpg"),
    }
}

/// One page of photos.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotoList {
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

/// Holds information returned from `flickr.photos.getInfo`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotoInfo {
    pub id: String,

    pub secret: String,

    pub server: String,

    #[serde(deserialize_with = "from_str_or_num")]
    pub farm: u32,

    #[serde(rename = "dateuploaded", deserialize_with = "from_unix_time")]
    pub date_uploaded: DateTime<Utc>,

    #[serde(rename = "isfavorite", default, deserialize_with = "from_int_bool")]
    pub is_favorite: bool,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub license: u32,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub rotation: u32,

    #[serde(
        rename = "originalsecret",
        default,
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_secret: Option<String>,

    #[serde(
        rename = "originalformat",
        default,
        deserialize_with = "from_empty_str_to_none"
    )]
    pub original_format: Option<String>,

    pub owner: PhotoOwner,

    #[serde(deserialize_with = "from_content")]
    pub title: String,

    #[serde(deserialize_with = "from_content")]
    pub description: String,

    pub visibility: Visibility,

    pub dates: PhotoDates,

    #[serde(default, deserialize_with = "from_str_or_num")]
    pub views: u64,

    #[serde(default)]
    tags: PhotoTags,

    #[serde(default)]
    urls: PhotoUrls,
}

impl PhotoInfo {
    pub fn source_url(&self, size: PhotoSize) -> String {
        source_url(&self.server, &self.id, &self.secret, size)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags.tag
    }

    /// The canonical photo page, when Flickr returned one.
    pub fn photo_page_url(&self) -> Option<&str> {
        self.urls
            .url
            .iter()
            .find(|u| u.url_type == "photopage")
            .map(|u| u.url.as_str())
    }
}

impl PartialEq for PhotoInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for PhotoInfo {}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoOwner {
    pub nsid: String,

    pub username: String,

    #[serde(rename = "realname", default)]
    pub real_name: String,

    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    #[serde(rename = "ispublic", deserialize_with = "from_int_bool")]
    pub is_public: bool,

    #[serde(rename = "isfriend", deserialize_with = "from_int_bool")]
    pub is_friend: bool,

    #[serde(rename = "isfamily", deserialize_with = "from_int_bool")]
    pub is_family: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoDates {
    #[serde(deserialize_with = "from_unix_time")]
    pub posted: DateTime<Utc>,

    #[serde(default, deserialize_with = "from_flickr_datetime")]
    pub taken: Option<NaiveDateTime>,

    #[serde(rename = "lastupdate", deserialize_with = "from_unix_time")]
    pub last_update: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: String,

    pub author: String,

    pub raw: String,

    #[serde(rename = "_content")]
    pub text: String,

    #[serde(rename = "machine_tag", default, deserialize_with = "from_int_bool")]
    pub is_machine_tag: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PhotoTags {
    #[serde(default)]
    tag: Vec<Tag>,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PhotoUrls {
    #[serde(default)]
    url: Vec<PhotoUrl>,
}

#[derive(Deserialize, Debug, Clone)]
struct PhotoUrl {
    #[serde(rename = "type")]
    url_type: String,

    #[serde(rename = "_content")]
    url: String,
}

/// One entry of `flickr.photos.getSizes`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Size {
    pub label: String,

    #[serde(deserialize_with = "from_str_or_num")]
    pub width: u32,

    #[serde(deserialize_with = "from_str_or_num")]
    pub height: u32,

    pub source: String,

    #[serde(default)]
    pub media: String,
}

/// Search criteria for `flickr.photos.search`. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub user_id: Option<String>,
    pub text: Option<String>,
    pub tags: Vec<String>,
    /// Require every tag rather than any of them.
    pub match_all_tags: bool,
    pub min_upload_date: Option<DateTime<Utc>>,
    pub max_upload_date: Option<DateTime<Utc>>,
    pub sort: Option<SortOrder>,
    pub privacy_filter: Option<PrivacyFilter>,
    pub safe_search: Option<SafetyLevel>,
    pub content_type: Option<ContentType>,
    pub extras: Vec<String>,
    pub per_page: Option<u32>,
}

impl SearchQuery {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("user_id", self.user_id.as_deref())
            .push_opt("text", self.text.as_deref());
        if !self.tags.is_empty() {
            params.push("tags", self.tags.join(","));
            params.push("tag_mode", if self.match_all_tags { "all" } else { "any" });
        }
        params
            .push_opt("min_upload_date", self.min_upload_date.map(|d| d.timestamp()))
            .push_opt("max_upload_date", self.max_upload_date.map(|d| d.timestamp()))
            .push_opt("sort", self.sort.map(<&'static str>::from))
            .push_opt("privacy_filter", self.privacy_filter.map(|p| p as u8))
            .push_opt("safe_search", self.safe_search.map(|s| s as u8))
            .push_opt("content_type", self.content_type.map(|c| c as u8));
        if !self.extras.is_empty() {
            params.push("extras", self.extras.join(","));
        }
        params.push_opt("per_page", self.per_page);
        params
    }
}

/// Flickr's tag list syntax: space separated, multi-word tags quoted.
pub(crate) fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| {
            let t = t.as_ref();
            if t.contains(' ') {
                format!("\"{t}\"")
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accessor for the `flickr.photos` namespace.
#[derive(Debug)]
pub struct Photos<'a, T> {
    session: Session<'a, T>,
}

impl<'a, T: Transport> Photos<'a, T> {
    pub(crate) fn new(session: Session<'a, T>) -> Self {
        Self { session }
    }

    /// Full details for a photo. `secret` allows access to non-public photos
    /// without a token.
    pub async fn get_info(
        &self,
        photo_id: &str,
        secret: Option<&str>,
    ) -> Result<PhotoInfo, FlickrError> {
        let mut params = Params::new();
        params.push("photo_id", photo_id).push_opt("secret", secret);
        obj_from_method!(self.session, "flickr.photos.getInfo", params, PhotoInfoResponse, photo)
    }

    /// Available sizes and their direct URLs.
    pub async fn get_sizes(&self, photo_id: &str) -> Result<Vec<Size>, FlickrError> {
        let mut params = Params::new();
        params.push("photo_id", photo_id);
        obj_from_method!(self.session, "flickr.photos.getSizes", params, SizesResponse, sizes)
            .map(|s| s.size)
    }

    /// One page of search results.
    pub async fn search(&self, query: &SearchQuery, page: u32) -> Result<PhotoList, FlickrError> {
        let mut params = query.to_params();
        params.push("page", page);
        obj_from_method!(self.session, "flickr.photos.search", params, PhotosResponse, photos)
    }

    /// Every search result, fetched one page at a time as the stream is polled.
    pub fn search_stream(
        &self,
        query: &SearchQuery,
    ) -> impl Stream<Item = Result<PhotoSummary, FlickrError>> + use<'a, T> {
        stream_photo_pages!(
            self.session,
            "flickr.photos.search",
            query.to_params(),
            PhotosResponse,
            photos
        )
    }

    /// Sets title and description.
    pub async fn set_meta(
        &self,
        photo_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), FlickrError> {
        let mut params = Params::new();
        params
            .push("photo_id", photo_id)
            .push("title", title)
            .push("description", description);
        self.session
            .post::<Empty>("flickr.photos.setMeta", params)
            .await
            .map(|_| ())
    }

    pub async fn add_tags<S: AsRef<str>>(&self, photo_id: &str, tags: &[S]) -> Result<(), FlickrError> {
        let mut params = Params::new();
        params.push("photo_id", photo_id).push("tags", join_tags(tags));
        self.session
            .post::<Empty>("flickr.photos.addTags", params)
            .await
            .map(|_| ())
    }

    /// Deletes a photo. Needs a token with `delete` permission.
    pub async fn delete(&self, photo_id: &str) -> Result<(), FlickrError> {
        let mut params = Params::new();
        params.push("photo_id", photo_id);
        self.session
            .post::<Empty>("flickr.photos.delete", params)
            .await
            .map(|_| ())
    }
}

// Expected response from flickr.photos.getInfo
#[derive(Deserialize, Debug)]
struct PhotoInfoResponse {
    photo: PhotoInfo,
}

// Expected response from flickr.photos.getSizes
#[derive(Deserialize, Debug)]
struct SizesResponse {
    sizes: Sizes,
}

#[derive(Deserialize, Debug)]
struct Sizes {
    size: Vec<Size>,
}
