use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared reqwest client for all outgoing adapters.
///
/// Transport defaults are kept as-is: no custom timeout, no retry.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}
