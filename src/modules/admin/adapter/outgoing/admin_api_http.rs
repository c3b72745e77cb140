use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;

use crate::{
    admin::application::{
        domain::{
            AnalyticsSummary, ContactMessage, Credentials, MessageStatus, PhotoUpload,
            UploadReceipt,
        },
        ports::outgoing::{AdminApi, AdminApiError},
    },
    shared::http::ApiEndpoints,
};

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// reqwest adapter for the privileged portfolio API endpoints.
#[derive(Debug, Clone)]
pub struct AdminApiHttp {
    client: Client,
    endpoints: ApiEndpoints,
}

impl AdminApiHttp {
    pub fn new(client: Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    async fn send(request: RequestBuilder) -> Result<Response, AdminApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| AdminApiError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AdminApiError::Unauthorized),
            status => Err(AdminApiError::Status(status.as_u16())),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AdminApiError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| AdminApiError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| AdminApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AdminApi for AdminApiHttp {
    async fn login(&self, credentials: &Credentials) -> Result<String, AdminApiError> {
        let request = self.client.post(self.endpoints.admin_login()).json(&json!({
            "username": credentials.username(),
            "password": credentials.password(),
        }));

        let body: LoginResponse = Self::decode(Self::send(request).await?).await?;
        Ok(body.access_token)
    }

    async fn verify_token(&self, token: &str) -> Result<(), AdminApiError> {
        let request = self
            .client
            .get(self.endpoints.admin_verify())
            .bearer_auth(token);

        Self::send(request).await.map(|_| ())
    }

    async fn analytics_summary(&self, token: &str) -> Result<AnalyticsSummary, AdminApiError> {
        let request = self
            .client
            .get(self.endpoints.analytics_stats())
            .bearer_auth(token);

        Self::decode(Self::send(request).await?).await
    }

    async fn list_messages(&self, token: &str) -> Result<Vec<ContactMessage>, AdminApiError> {
        let request = self
            .client
            .get(self.endpoints.contact_messages())
            .bearer_auth(token);

        Self::decode(Self::send(request).await?).await
    }

    async fn update_message_status(
        &self,
        token: &str,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<(), AdminApiError> {
        let url = self
            .endpoints
            .contact_message(message_id)
            .ok_or_else(|| AdminApiError::InvalidMessageId(message_id.to_string()))?;
        let request = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(&json!({ "status": status }));

        // the updated record is returned but the dashboard reload supersedes it
        Self::send(request).await.map(|_| ())
    }

    async fn update_credentials(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<(), AdminApiError> {
        let request = self
            .client
            .put(self.endpoints.admin_credentials())
            .bearer_auth(token)
            .json(&json!({
                "username": credentials.username(),
                "password": credentials.password(),
            }));

        Self::send(request).await.map(|_| ())
    }

    async fn upload_photo(
        &self,
        token: &str,
        upload: PhotoUpload,
    ) -> Result<UploadReceipt, AdminApiError> {
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| AdminApiError::Network(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let request = self
            .client
            .post(self.endpoints.upload_photo())
            .bearer_auth(token)
            .multipart(form);

        Self::decode(Self::send(request).await?).await
    }
}
