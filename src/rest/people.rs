/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::Params;
use crate::rest::macros::obj_from_method;
use crate::rest::parsers::{from_content, from_int_bool, from_str_or_num};
use crate::rest::{PhotoList, Session, Transport};
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Minimal user record returned by lookups and `flickr.test.login`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.findByUsername.html).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,

    #[serde(deserialize_with = "from_content")]
    pub username: String,
}

/// Holds information returned from `flickr.people.getInfo`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct Person {
    pub id: String,

    pub nsid: String,

    #[serde(rename = "ispro", default, deserialize_with = "from_int_bool")]
    pub is_pro: bool,

    #[serde(rename = "iconserver", default)]
    pub icon_server: String,

    #[serde(rename = "iconfarm", default, deserialize_with = "from_str_or_num")]
    pub icon_farm: u32,

    #[serde(deserialize_with = "from_content")]
    pub username: String,

    #[serde(rename = "realname", default, deserialize_with = "from_content")]
    pub real_name: Option<String>,

    #[serde(default, deserialize_with = "from_content")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "from_content")]
    pub description: Option<String>,

    #[serde(rename = "photosurl", deserialize_with = "from_content")]
    pub photos_url: String,

    #[serde(rename = "profileurl", deserialize_with = "from_content")]
    pub profile_url: String,

    #[serde(default)]
    pub photos: Option<PersonPhotos>,
}

impl Person {
    /// URL of the user's buddy icon, or Flickr's default icon when none is set.
    pub fn buddy_icon_url(&self) -> String {
        match self.icon_server.parse::<u64>() {
            Ok(server) if server > 0 => format!(
                "https://farm{}.staticflickr.com/{}/buddyicons/{}.jpg",
                self.icon_farm, server, self.nsid
            ),
            _ => "https://www.flickr.com/images/buddyicon.gif".to_string(),
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.nsid == other.nsid
    }
}
impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nsid.hash(state);
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "username: {}, nsid: {}", self.username, self.nsid)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonPhotos {
    #[serde(rename = "firstdatetaken", default, deserialize_with = "from_content")]
    pub first_date_taken: Option<String>,

    #[serde(rename = "firstdate", default, deserialize_with = "from_content")]
    pub first_date: Option<String>,

    #[serde(deserialize_with = "from_content")]
    pub count: u64,
}

/// Accessor for the `flickr.people` namespace.
#[derive(Debug)]
pub struct People<'a, T> {
    session: Session<'a, T>,
}

impl<'a, T: Transport> People<'a, T> {
    pub(crate) fn new(session: Session<'a, T>) -> Self {
        Self { session }
    }

    /// Looks up a user by screen name.
    pub async fn find_by_username(&self, username: &str) -> Result<User, FlickrError> {
        let mut params = Params::new();
        params.push("username", username);
        obj_from_method!(self.session, "flickr.people.findByUsername", params, UserResponse, user)
    }

    /// Looks up a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<User, FlickrError> {
        let mut params = Params::new();
        params.push("find_email", email);
        obj_from_method!(self.session, "flickr.people.findByEmail", params, UserResponse, user)
    }

    /// Returns profile information for the given NSID.
    pub async fn get_info(&self, user_id: &str) -> Result<Person, FlickrError> {
        let mut params = Params::new();
        params.push("user_id", user_id);
        obj_from_method!(self.session, "flickr.people.getInfo", params, PersonResponse, person)
    }

    /// One page of the photos owned by `user_id` visible to the caller.
    pub async fn get_photos(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PhotoList, FlickrError> {
        let mut params = Params::new();
        params
            .push("user_id", user_id)
            .push("page", page)
            .push("per_page", per_page);
        obj_from_method!(self.session, "flickr.people.getPhotos", params, PhotosResponse, photos)
    }
}

// Expected response from a user lookup
#[derive(Deserialize, Debug)]
pub(crate) struct UserResponse {
    pub(crate) user: User,
}

// Expected response from flickr.people.getInfo
#[derive(Deserialize, Debug)]
struct PersonResponse {
    person: Person,
}

// Expected response from a photo list request
#[derive(Deserialize, Debug)]
pub(crate) struct PhotosResponse {
    pub(crate) photos: PhotoList,
}
