/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Signature base string construction (RFC 5849 section 3.4.1).

use crate::errors::FlickrError;
use crate::oauth::encoding::percent_encode;
use crate::oauth::params::Params;
use crate::oauth::request::HttpMethod;
use std::borrow::Cow;
use url::Url;

/// Scheme and host are lower-cased, default ports and any query or fragment
/// are dropped. The path keeps its case.
pub fn normalize_url(url: &str) -> Result<String, FlickrError> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;

    let mut normalized = format!("{}://{}", parsed.scheme(), host.to_ascii_lowercase());
    // `port()` is None when the port is the scheme default
    if let Some(port) = parsed.port() {
        normalized.push_str(&format!(":{port}"));
    }
    normalized.push_str(parsed.path());
    Ok(normalized)
}

/// Encodes each name and value, sorts by name then value, and joins with `&`.
pub fn normalize_parameters<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = params
        .into_iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&encoded_url&encoded_params`, the exact input to the signer.
///
/// Binary parameters contribute nothing since only text pairs are read.
pub fn signature_base_string(
    method: HttpMethod,
    base_url: &str,
    params: &Params,
) -> Result<String, FlickrError> {
    let url = normalize_url(base_url)?;
    let param_string = normalize_parameters(params.text_pairs());
    Ok(format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(&url),
        percent_encode(&param_string)
    ))
}
