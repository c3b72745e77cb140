mod admin_api;
mod token_store;

pub use admin_api::{AdminApi, AdminApiError};
pub use token_store::{session_token_key, TokenStore, TokenStoreError, TOKEN_STORAGE_KEY};
