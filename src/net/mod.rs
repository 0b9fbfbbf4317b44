//! Network response normalization.
//!
//! Turns a raw transport response (status code + optional body) into a
//! `Result` carrying a typed failure, so the state layer never inspects
//! transport details. Classification precedence: transport fault, then
//! status, then absent body, then validator.
//!
//! The normalizer itself is transport-agnostic; [`get_json`] adapts a
//! reqwest response into the [`RawResponse`] shape it consumes.

mod error;
mod http;
mod normalize;
mod response;

pub use error::FetchError;
pub use http::{get_json, into_raw};
pub use normalize::{normalize, normalize_ok};
pub use response::RawResponse;
