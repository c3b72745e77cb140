// src/api/schemas.rs
//
// Documentation twins of `shared::api::ApiResponse`: the runtime envelope is
// built there, these types only describe it in the OpenAPI document.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, upper snake case
    #[schema(example = "UNKNOWN_THEME")]
    pub code: String,

    #[schema(example = "Unknown theme: option9")]
    pub message: String,
}
