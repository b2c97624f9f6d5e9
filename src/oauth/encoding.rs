/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! The two encodings used on the wire.
//!
//! [`percent_encode`] is the strict RFC 3986 profile OAuth requires inside the
//! signature base string and the signing key. [`form_encode`] is ordinary
//! `application/x-www-form-urlencoded` encoding used for the transmitted query
//! string and POST body. They differ on space (`%20` vs `+`) and `*`, so they
//! must stay separate.

use crate::errors::FlickrError;
use std::borrow::Cow;

/// Percent-encodes everything except `A-Z a-z 0-9 - . _ ~`, byte by UTF-8 byte,
/// with uppercase hex digits.
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Reverses [`percent_encode`].
pub fn percent_decode(input: &str) -> Result<String, FlickrError> {
    Ok(urlencoding::decode(input)?.into_owned())
}

/// Form encoding for transmitted query strings and bodies.
pub fn form_encode(input: &str) -> String {
    url::form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
