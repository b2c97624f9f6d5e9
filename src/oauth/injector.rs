/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::FlickrError;
use crate::oauth::params::Params;
use crate::oauth::signer::SIGNATURE_METHOD;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_VERSION_1: &str = "1.0";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_VERIFIER: &str = "oauth_verifier";

static NONCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 64 random bits followed by a process-wide counter, so two calls in the same
/// process never collide and separate processes are unlikely to.
pub fn generate_nonce() -> String {
    let count = NONCE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let random: u64 = rand::random();
    format!("{random:016x}{count:x}")
}

/// Current Unix time in seconds.
pub fn generate_timestamp() -> Result<u64, FlickrError> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

/// Adds the standard `oauth_*` fields that are not already present.
///
/// `oauth_token` is only added when a token is given. `oauth_signature` is
/// never added here.
pub fn inject(
    params: &mut Params,
    consumer_key: &str,
    token: Option<&str>,
) -> Result<(), FlickrError> {
    if !params.contains(OAUTH_NONCE) {
        params.push(OAUTH_NONCE, generate_nonce());
    }
    if !params.contains(OAUTH_TIMESTAMP) {
        params.push(OAUTH_TIMESTAMP, generate_timestamp()?);
    }
    params.push_if_absent(OAUTH_SIGNATURE_METHOD, SIGNATURE_METHOD);
    params.push_if_absent(OAUTH_VERSION, OAUTH_VERSION_1);
    params.push_if_absent(OAUTH_CONSUMER_KEY, consumer_key);
    if let Some(token) = token {
        params.push_if_absent(OAUTH_TOKEN, token);
    }
    Ok(())
}
