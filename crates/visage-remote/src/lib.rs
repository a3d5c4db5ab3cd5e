//! # visage-remote
//!
//! Client side of the optional remote inference contract:
//! `POST <base>/api/analyze` with the signal bag as the JSON body, answered
//! by `{ success: true, analysis: <Profile> }` or a failure.
//!
//! [`protocol`] validates the response envelope and is always available.
//! The reqwest-backed [`HttpAnalyzer`] sits behind the `http` feature.

pub mod protocol;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpAnalyzer;
pub use protocol::{parse_response, AnalyzeResponse, REQUEST_ID_HEADER};
