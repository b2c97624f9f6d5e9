/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth 1.0a HMAC-SHA1 request signing and the three-legged token flow.

pub mod base_string;
pub mod credentials;
pub mod encoding;
pub mod flow;
pub mod injector;
pub mod params;
pub mod request;
pub mod signer;

pub use base_string::signature_base_string;
pub use credentials::*;
pub use encoding::{form_encode, percent_decode, percent_encode};
pub use flow::*;
pub use params::*;
pub use request::*;
pub use signer::sign;
