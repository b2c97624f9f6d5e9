/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Permission level requested at authorization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum Perms {
    #[strum(serialize = "read")]
    Read,
    #[strum(serialize = "write")]
    Write,
    #[strum(serialize = "delete")]
    Delete,
}

/// Static image sizes and their URL suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum PhotoSize {
    #[strum(serialize = "s")]
    Square75,
    #[strum(serialize = "q")]
    Square150,
    #[strum(serialize = "t")]
    Thumbnail100,
    #[strum(serialize = "m")]
    Small240,
    #[strum(serialize = "n")]
    Small320,
    #[strum(serialize = "w")]
    Small400,
    #[strum(serialize = "")]
    Medium500,
    #[strum(serialize = "z")]
    Medium640,
    #[strum(serialize = "c")]
    Medium800,
    #[strum(serialize = "b")]
    Large1024,
    #[strum(serialize = "h")]
    Large1600,
    #[strum(serialize = "k")]
    Large2048,
}

impl PhotoSize {
    pub fn suffix(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum SortOrder {
    #[strum(serialize = "date-posted-asc")]
    DatePostedAsc,
    #[strum(serialize = "date-posted-desc")]
    DatePostedDesc,
    #[strum(serialize = "date-taken-asc")]
    DateTakenAsc,
    #[strum(serialize = "date-taken-desc")]
    DateTakenDesc,
    #[strum(serialize = "interestingness-asc")]
    InterestingnessAsc,
    #[strum(serialize = "interestingness-desc")]
    InterestingnessDesc,
    #[strum(serialize = "relevance")]
    Relevance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrivacyFilter {
    Public = 1,
    Friends = 2,
    Family = 3,
    FriendsAndFamily = 4,
    Private = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SafetyLevel {
    Safe = 1,
    Moderate = 2,
    Restricted = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ContentType {
    Photo = 1,
    Screenshot = 2,
    Other = 3,
}
