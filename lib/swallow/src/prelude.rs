//! Prelude module for convenient imports.
//!
//! Re-exports the types most call sites need:
//!
//! ```
//! use swallow::prelude::*;
//! ```

pub use crate::{
    ApiClient, ApiEnvelope, ApiResponse, Error, Headers, HyperTransport, Method, Phase, Reply,
    Request, Result, Transport, TransportConfig, UNKNOWN, from_json, to_json,
};
pub use serde::{Deserialize, Serialize};
