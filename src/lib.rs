/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This library is a client for the Flickr REST API.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - OAuth 1.0a (HMAC-SHA1) request signing
//! - The three-legged flow for obtaining an access token
//! - `flickr.test`, `flickr.people`, `flickr.photos` and `flickr.photosets` methods
//!     - Search results and photoset contents as paged streams
//! - Photo upload and replace
//! - Lower level interface for handling the raw communication
//!
//! *Access tokens are handed to each [`Session`] explicitly. Storing them between runs is
//! left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::{Client, OAuthToken, Perms, SearchQuery, OUT_OF_BAND};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn tagged_photos(api_key: &str, api_secret: &str) -> anyhow::Result<()> {
//!     let client = Client::new(api_key, api_secret)?;
//!
//!     // Obtain an access token. The user opens the URL and reads back the verifier.
//!     let request_token = client.oauth().request_token(OUT_OF_BAND).await?;
//!     let url = client.oauth().authorization_url(&request_token, Perms::Read)?;
//!     println!("Authorize at {url}");
//!     let verifier = "123-456-789";
//!     let identity = client.oauth().access_token(&request_token, verifier).await?;
//!
//!     // Calls through this session are signed with the user's token
//!     let session = client.session(Some(&identity.token));
//!     let query = SearchQuery {
//!         user_id: Some(identity.user_id.clone()),
//!         tags: vec!["sunset".into()],
//!         ..Default::default()
//!     };
//!     let photos = session.photos().search_stream(&query);
//!     pin_mut!(photos);
//!     while let Some(photo) = photos.next().await {
//!         let photo = photo?;
//!         println!("{} {}", photo.title, photo.page_url());
//!     }
//!
//!     // Public methods need no token
//!     let user = client.session(None).people().find_by_username("bees").await?;
//!     println!("{} is {}", user.username, user.id);
//!     Ok(())
//! }
//! ```
//!
pub mod errors;
pub mod oauth;
pub mod rest;

pub use errors::FlickrError;
pub use oauth::{ConsumerCreds, Identity, OAuthToken, OUT_OF_BAND, RequestToken};
pub use rest::*;
