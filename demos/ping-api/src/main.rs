//! Ping API Example
//!
//! Demonstrates the swallow client: typed calls with no error branch, and
//! the flattened-envelope pattern for payloads beyond the bare contract.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use swallow::prelude::*;

// ============================================================================
// Data Types
// ============================================================================

/// A player profile as the service reports it.
#[derive(Debug, Default, Deserialize)]
struct PlayerResponse {
    #[serde(flatten)]
    envelope: ApiEnvelope,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    level: Option<u32>,
}

impl ApiResponse for PlayerResponse {
    fn code(&self) -> i32 {
        self.envelope.code
    }

    fn err_code(&self) -> Option<&str> {
        self.envelope.err_code.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.envelope.message.as_deref()
    }

    fn from_failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            envelope: ApiEnvelope::from_failure(code, message),
            ..Self::default()
        }
    }
}

/// Request to create a player.
#[derive(Debug, Serialize)]
struct CreatePlayer<'a> {
    name: &'a str,
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

#[tokio::main]
async fn main() {
    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_owned());

    let client = ApiClient::new().set_header("X-Api-Key", "demo");

    // No Result in sight: the outcome lands in the contract fields.
    let ping: ApiEnvelope = client.get(&format!("{base}/ping")).await;
    match ping.code {
        200 => println!("service is up: {:?}", ping.message),
        UNKNOWN => println!("no server verdict: {:?}", ping.message),
        code => println!("service answered {code}: {:?}", ping.message),
    }

    let created: PlayerResponse = client
        .post(&format!("{base}/players"), &CreatePlayer { name: "Kira" })
        .await;

    if created.code() == 200 {
        println!(
            "created player {:?} at level {:?}",
            created.name, created.level
        );
    } else {
        println!(
            "create failed: code={} errCode={:?} message={:?}",
            created.code(),
            created.err_code(),
            created.message()
        );
    }
}

// ============================================================================
// Tests using wiremock
// ============================================================================
