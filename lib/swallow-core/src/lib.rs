//! Contract types and collaborator interfaces for the swallow HTTP client.
//!
//! This crate defines the pieces the facade in `swallow` is wired from:
//! - [`ApiResponse`] and [`ApiEnvelope`] - the response contract every call
//!   decodes into
//! - [`Headers`] - request header set with first-write-wins semantics
//! - [`Method`], [`Request`], [`Reply`] - the exchange vocabulary
//! - [`Transport`] - the seam a real HTTP stack plugs into
//! - [`Error`], [`Phase`], [`Result`] - the failure taxonomy
//! - [`to_json`] and [`from_json`] - the JSON codec
//!
//! Nothing here performs I/O.

mod codec;
mod contract;
mod error;
mod headers;
mod method;
mod reply;
mod request;
mod transport;

pub use codec::{from_json, to_json};
pub use contract::{ApiEnvelope, ApiResponse, UNKNOWN};
pub use error::{Error, Phase, Result};
pub use headers::Headers;
pub use method::Method;
pub use reply::Reply;
pub use request::Request;
pub use transport::Transport;
