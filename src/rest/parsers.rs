/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

// Flickr wraps many scalars as {"_content": value}
#[derive(Deserialize)]
struct Content<T> {
    #[serde(rename = "_content")]
    content: T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum<T> {
    Num(T),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntBool {
    Bool(bool),
    Int(u8),
    Str(String),
}

// Unwraps {"_content": ...}
pub fn from_content<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Content::<T>::deserialize(deserializer)?.content)
}

// Parses values that arrive either as numbers or as numeric strings
pub fn from_str_or_num<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match StrOrNum::<T>::deserialize(deserializer)? {
        StrOrNum::Num(v) => Ok(v),
        StrOrNum::Str(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

// Parses 0/1, "0"/"1" and true/false
pub fn from_int_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match IntBool::deserialize(deserializer)? {
        IntBool::Bool(b) => Ok(b),
        IntBool::Int(i) => Ok(i != 0),
        IntBool::Str(s) => Ok(!matches!(s.as_str(), "" | "0" | "false")),
    }
}

// Parses unix seconds sent as a string or number
pub fn from_unix_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs: i64 = from_str_or_num(deserializer)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| D::Error::custom("timestamp out of range"))
}

// Parses "YYYY-MM-DD hh:mm:ss" as sent for date taken. Empty values become None.
pub fn from_flickr_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
        .map(Some)
        .map_err(D::Error::custom)
}

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(deserialize_with = "from_content")]
        name: String,

        #[serde(deserialize_with = "from_content")]
        count: u64,

        #[serde(deserialize_with = "from_str_or_num")]
        pages: u32,

        #[serde(deserialize_with = "from_int_bool")]
        public: bool,

        #[serde(deserialize_with = "from_unix_time")]
        posted: DateTime<Utc>,

        #[serde(deserialize_with = "from_flickr_datetime")]
        taken: Option<NaiveDateTime>,

        #[serde(default, deserialize_with = "from_empty_str_to_none")]
        alias: Option<String>,
    }

    #[test]
    fn flickr_shapes_decode() {
        let sample: Sample = serde_json::from_value(json!({
            "name": {"_content": "Stewart"},
            "count": {"_content": 42},
            "pages": "7",
            "public": 1,
            "posted": "1356054542",
            "taken": "2012-12-20 18:49:02",
            "alias": ""
        }))
        .unwrap();
        assert_eq!(sample.name, "Stewart");
        assert_eq!(sample.count, 42);
        assert_eq!(sample.pages, 7);
        assert!(sample.public);
        assert_eq!(sample.posted.timestamp(), 1356054542);
        let taken = sample.taken.unwrap();
        assert_eq!((taken.year(), taken.hour()), (2012, 18));
        assert_eq!(sample.alias, None);
    }

    #[test]
    fn numbers_and_strings_both_accepted() {
        let sample: Sample = serde_json::from_value(json!({
            "name": {"_content": ""},
            "count": {"_content": 0},
            "pages": 3,
            "public": "0",
            "posted": 0,
            "taken": "",
            "alias": "stewart"
        }))
        .unwrap();
        assert_eq!(sample.pages, 3);
        assert!(!sample.public);
        assert_eq!(sample.taken, None);
        assert_eq!(sample.alias.as_deref(), Some("stewart"));
    }

    #[test]
    fn non_numeric_string_is_rejected() {
        let result = serde_json::from_value::<Sample>(json!({
            "name": {"_content": ""},
            "count": {"_content": 0},
            "pages": "many",
            "public": 0,
            "posted": 0,
            "taken": ""
        }));
        assert!(result.is_err());
    }
}
