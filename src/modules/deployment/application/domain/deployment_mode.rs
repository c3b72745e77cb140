use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether the site can reach a portfolio API.
///
/// Derived once at startup and never changes during the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    HasBackend,
    StaticOnly,
}

impl DeploymentMode {
    pub fn is_static(&self) -> bool {
        matches!(self, DeploymentMode::StaticOnly)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::HasBackend => "has_backend",
            DeploymentMode::StaticOnly => "static_only",
        }
    }
}

/// Everything the detector looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentInputs {
    /// `RUST_ENV` value, e.g. `development` or `production`.
    pub build_mode: String,
    pub force_static: bool,
    pub backend_url: Option<String>,
    /// Public host name the site is served under.
    pub hostname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DeploymentMode::StaticOnly).unwrap(),
            "\"static_only\""
        );
        assert_eq!(
            serde_json::to_string(&DeploymentMode::HasBackend).unwrap(),
            "\"has_backend\""
        );
    }

    #[test]
    fn test_is_static() {
        assert!(DeploymentMode::StaticOnly.is_static());
        assert!(!DeploymentMode::HasBackend.is_static());
    }
}
