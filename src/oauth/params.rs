/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use std::fmt::{self, Display};

/// File payload sent as a multipart part. Never signed.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryValue {
    pub data: Bytes,
    pub file_name: String,
    pub content_type: String,
}

impl fmt::Debug for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryValue")
            .field("len", &self.data.len())
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Binary(BinaryValue),
}

/// A single request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

impl Param {
    /// Values go through `Display`, which never applies locale grouping or decimal commas.
    pub fn new(name: impl Into<String>, value: impl Display) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Text(value.to_string()),
        }
    }

    /// Flickr flags are `1`/`0`.
    pub fn flag(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, u8::from(value))
    }

    pub fn binary(
        name: impl Into<String>,
        data: impl Into<Bytes>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Binary(BinaryValue {
                data: data.into(),
                file_name: file_name.into(),
                content_type: content_type.into(),
            }),
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.value, ParamValue::Binary(_))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            ParamValue::Text(v) => Some(v.as_str()),
            ParamValue::Binary(_) => None,
        }
    }
}

/// Request fields in the order the caller added them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.0.push(Param::new(name, value));
        self
    }

    pub fn push_flag(&mut self, name: impl Into<String>, value: bool) -> &mut Self {
        self.0.push(Param::flag(name, value));
        self
    }

    /// Adds the field only when a value is present.
    pub fn push_opt(&mut self, name: impl Into<String>, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn push_param(&mut self, param: Param) -> &mut Self {
        self.0.push(param);
        self
    }

    /// Adds the field unless one with the same name exists. Returns whether it was added.
    pub fn push_if_absent(&mut self, name: &str, value: impl Display) -> bool {
        if self.contains(name) {
            return false;
        }
        self.push(name, value);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.name == name)
    }

    /// First text value with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|p| p.name == name)
            .find_map(Param::text)
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|p| p.name != name);
    }

    pub fn has_binary(&self) -> bool {
        self.0.iter().any(Param::is_binary)
    }

    /// Text fields only; binary fields are skipped.
    pub fn text_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|p| p.text().map(|v| (p.name.as_str(), v)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| Param::new(k, v)).collect())
    }
}

impl IntoIterator for Params {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
