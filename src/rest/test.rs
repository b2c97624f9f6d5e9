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
use crate::rest::macros::obj_from_method;
use crate::rest::people::UserResponse;
use crate::rest::{Session, Transport, User};
use std::collections::BTreeMap;

/// Accessor for the `flickr.test` namespace.
#[derive(Debug)]
pub struct TestApi<'a, T> {
    session: Session<'a, T>,
}

impl<'a, T: Transport> TestApi<'a, T> {
    pub(crate) fn new(session: Session<'a, T>) -> Self {
        Self { session }
    }

    /// Sends `params` and returns what Flickr echoed back.
    pub async fn echo(&self, params: Params) -> Result<BTreeMap<String, String>, FlickrError> {
        let echoed: BTreeMap<String, serde_json::Value> =
            self.session.get("flickr.test.echo", params).await?;
        Ok(echoed
            .into_iter()
            .filter(|(name, _)| name != "stat")
            .filter_map(|(name, value)| content_string(value).map(|v| (name, v)))
            .collect())
    }

    /// The user owning the session token.
    pub async fn login(&self) -> Result<User, FlickrError> {
        self.session.require_token()?;
        obj_from_method!(self.session, "flickr.test.login", Params::new(), UserResponse, user)
    }

    /// Signed no-op, useful to check a token still works.
    pub async fn null(&self) -> Result<(), FlickrError> {
        self.session.require_token()?;
        self.session
            .get::<Empty>("flickr.test.null", Params::new())
            .await
            .map(|_| ())
    }
}

// Echoed values arrive as {"_content": "..."}
fn content_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Object(mut map) => match map.remove("_content")? {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        },
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn echoed_values_are_unwrapped() {
        assert_eq!(
            content_string(json!({"_content": "flickr.test.echo"})).as_deref(),
            Some("flickr.test.echo")
        );
        assert_eq!(content_string(json!({"_content": 5})).as_deref(), Some("5"));
        assert_eq!(content_string(json!("ok")).as_deref(), Some("ok"));
        assert_eq!(content_string(json!([1, 2])), None);
    }
}
