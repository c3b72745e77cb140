use actix_web::{http::header, post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    admin::{
        adapter::incoming::web::extractors::AdminClient,
        application::{
            domain::{PhotoUpload, UploadReceipt},
            ports::{incoming::AdminSessionError, outgoing::AdminApiError},
        },
    },
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhotoUploadQuery {
    /// Name the backend stores the photo under.
    pub file_name: String,
}

/// Forward a raw image body to the backend's photo upload endpoint.
#[utoipa::path(
    post,
    path = "/admin/photo",
    tag = "admin",
    params(PhotoUploadQuery),
    request_body(content = Vec<u8>, content_type = "image/jpeg"),
    responses(
        (status = 200, description = "Photo stored", body = inline(SuccessResponse<UploadReceipt>)),
        (status = 400, description = "Empty body or missing file name", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Static deployment", body = ErrorResponse),
        (status = 502, description = "Backend rejected the upload", body = ErrorResponse)
    )
)]
#[post("/admin/photo")]
pub async fn upload_photo_handler(
    client: AdminClient,
    req: HttpRequest,
    query: web::Query<PhotoUploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let file_name = query.into_inner().file_name.trim().to_string();
    if file_name.is_empty() {
        return ApiResponse::bad_request("MISSING_FILE_NAME", "file_name is required");
    }
    if body.is_empty() {
        return ApiResponse::bad_request("EMPTY_UPLOAD", "Request body is empty");
    }

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let upload = PhotoUpload {
        file_name,
        content_type,
        bytes: body.to_vec(),
    };

    match data.admin_session.upload_photo(client.session(), upload).await {
        Ok(receipt) => {
            info!(filename = ?receipt.filename, "Photo uploaded");
            ApiResponse::success(receipt)
        }
        Err(AdminSessionError::StaticDeployment) => ApiResponse::forbidden(
            "STATIC_DEPLOYMENT",
            "Admin features are unavailable in a static deployment",
        ),
        Err(AdminSessionError::NotAuthenticated)
        | Err(AdminSessionError::Api(AdminApiError::Unauthorized)) => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Admin login required")
        }
        Err(e) => {
            error!(error = %e, "Photo upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", &e.to_string())
        }
    }
}
