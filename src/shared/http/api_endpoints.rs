use reqwest::Url;

/// URL builder for the portfolio API.
///
/// Every endpoint lives under `{base}/api`. The base is stored without a
/// trailing slash so `https://api.example.com/` and `https://api.example.com`
/// produce identical URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }

    pub fn portfolio(&self) -> String {
        self.api("/portfolio")
    }

    pub fn admin_login(&self) -> String {
        self.api("/admin/login")
    }

    pub fn admin_verify(&self) -> String {
        self.api("/admin/verify")
    }

    pub fn admin_credentials(&self) -> String {
        self.api("/admin/credentials")
    }

    pub fn analytics_stats(&self) -> String {
        self.api("/analytics/stats")
    }

    pub fn contact_messages(&self) -> String {
        self.api("/contact")
    }

    /// The id always lands as one percent-encoded path segment under
    /// `/contact`; ids that cannot (empty, `.` or `..`) give `None`.
    pub fn contact_message(&self, message_id: &str) -> Option<Url> {
        if matches!(message_id, "" | "." | "..") {
            return None;
        }
        let mut url = Url::parse(&self.contact_messages()).ok()?;
        url.path_segments_mut().ok()?.push(message_id);
        Some(url)
    }

    pub fn upload_photo(&self) -> String {
        self.api("/upload/photo")
    }
}
