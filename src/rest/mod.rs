/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Flickr REST namespaces, the JSON envelope and the HTTP transport.

mod macros;
pub(crate) mod parsers;

pub mod api;
pub mod client;
pub mod people;
pub mod photos;
pub mod photosets;
pub mod properties;
pub mod test;
pub mod transport;
pub mod upload;

pub use api::*;
pub use client::*;
pub use people::*;
pub use photos::*;
pub use photosets::*;
pub use properties::*;
pub use test::*;
pub use transport::*;
pub use upload::*;
