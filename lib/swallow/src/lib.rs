//! Typed JSON-over-HTTP client whose calls never fail, they decode.
//!
//! [`ApiClient`] issues GET and POST requests and decodes every response
//! into a caller-chosen type implementing the [`ApiResponse`] contract.
//! There is no `Result` at call sites: connection faults, failure statuses,
//! and undecodable bodies all come back as the same typed value with the
//! failure folded into its `code` and `message` fields. Branch on `code`,
//! nothing else.
//!
//! # Example
//!
//! ```no_run
//! use swallow::{ApiClient, ApiEnvelope, UNKNOWN};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = ApiClient::new().set_header("X-Api-Key", "secret");
//!
//!     let pong: ApiEnvelope = client.get("https://api.example.com/ping").await;
//!     match pong.code {
//!         200 => println!("pong: {:?}", pong.message),
//!         UNKNOWN => eprintln!("no server verdict: {:?}", pong.message),
//!         code => eprintln!("server said {code}: {:?}", pong.message),
//!     }
//! }
//! ```
//!
//! Payloads richer than the bare contract embed [`ApiEnvelope`] with
//! `#[serde(flatten)]`; see [`ApiResponse`] for the pattern.

mod client;
mod config;
pub mod prelude;
mod transport;

pub use client::ApiClient;
pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;

// Re-export core types
pub use swallow_core::{
    ApiEnvelope, ApiResponse, Error, Headers, Method, Phase, Reply, Request, Result, Transport,
    UNKNOWN, from_json, to_json,
};
