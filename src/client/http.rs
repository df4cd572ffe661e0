//! Shared HTTP client utilities.

use std::sync::OnceLock;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// No overall request deadline is set here; a deadline is applied per call
/// only when the owning client configured one.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
