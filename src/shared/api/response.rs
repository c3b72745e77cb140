use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope of the `/api/site/*` and `/admin/photo` routes:
/// `{"success": true, "data": ..}` or `{"success": false, "error": {code, message}}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    fn failure(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.to_owned(),
                message: message.to_owned(),
            }),
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::NOT_FOUND, code, message)
    }

    /// Navigation that the current view state does not allow.
    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::CONFLICT, code, message)
    }

    /// The portfolio backend refused or failed a forwarded request.
    pub fn bad_gateway(code: &str, message: &str) -> HttpResponse {
        Self::failure(StatusCode::BAD_GATEWAY, code, message)
    }
}
