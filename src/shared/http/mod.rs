mod api_endpoints;
mod client;

pub use api_endpoints::ApiEndpoints;
pub use client::build_http_client;
