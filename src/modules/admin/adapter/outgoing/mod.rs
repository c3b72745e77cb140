mod admin_api_http;
mod file_token_store;
mod memory_token_store;

pub use admin_api_http::AdminApiHttp;
pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;
