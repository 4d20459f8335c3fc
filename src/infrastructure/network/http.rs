// HTTP client utilities
use crate::domain::error::JsontrError;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client shared by every engine request
pub fn create_client(timeout_secs: u64) -> Result<Client, JsontrError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("jsontr/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
