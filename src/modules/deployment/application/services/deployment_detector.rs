use crate::deployment::application::domain::{DeploymentInputs, DeploymentMode};

/// Value shipped in sample env files; treated as "no backend".
pub const BACKEND_URL_PLACEHOLDER: &str = "https://your-backend-url.com";

/// Hosts that only ever serve static files.
pub const STATIC_HOST_PATTERNS: &[&str] = &[
    "github.io",
    "netlify.app",
    "vercel.app",
    "pages.dev",
    "surge.sh",
    "gitlab.io",
];

/// Classify the deployment. First matching rule wins:
///
/// 1. force-static flag set
/// 2. backend address empty, absent, `undefined` or the placeholder
/// 3. hostname on a static-hosting domain
/// 4. otherwise the backend is used
///
/// A production build without a backend address is already caught by rule 2,
/// so the build mode never changes the outcome on its own.
pub fn detect_deployment_mode(inputs: &DeploymentInputs) -> DeploymentMode {
    if inputs.force_static {
        return DeploymentMode::StaticOnly;
    }

    if !has_backend_address(inputs.backend_url.as_deref()) {
        return DeploymentMode::StaticOnly;
    }

    if is_static_host(&inputs.hostname) {
        return DeploymentMode::StaticOnly;
    }

    DeploymentMode::HasBackend
}

fn has_backend_address(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") | Some("undefined") => false,
        Some(url) => url.trim_end_matches('/') != BACKEND_URL_PLACEHOLDER,
    }
}

fn is_static_host(hostname: &str) -> bool {
    let host = hostname
        .trim()
        .split(':')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    STATIC_HOST_PATTERNS
        .iter()
        .any(|pattern| host == *pattern || host.ends_with(&format!(".{}", pattern)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(backend_url: Option<&str>, hostname: &str) -> DeploymentInputs {
        DeploymentInputs {
            build_mode: "development".to_string(),
            force_static: false,
            backend_url: backend_url.map(str::to_string),
            hostname: hostname.to_string(),
        }
    }

    #[test]
    fn test_backend_configured_on_regular_host() {
        let mode = detect_deployment_mode(&inputs(Some("https://api.example.com"), "example.com"));
        assert_eq!(mode, DeploymentMode::HasBackend);
    }

    #[test]
    fn test_force_static_wins_over_everything() {
        for build_mode in ["development", "production", "test"] {
            for backend in [None, Some("https://api.example.com"), Some("")] {
                for host in ["localhost", "example.com", "me.github.io"] {
                    let mut input = inputs(backend, host);
                    input.build_mode = build_mode.to_string();
                    input.force_static = true;

                    assert_eq!(
                        detect_deployment_mode(&input),
                        DeploymentMode::StaticOnly,
                        "force_static ignored for {:?}",
                        input
                    );
                }
            }
        }
    }

    #[test]
    fn test_missing_backend_is_static() {
        assert_eq!(
            detect_deployment_mode(&inputs(None, "localhost")),
            DeploymentMode::StaticOnly
        );
        assert_eq!(
            detect_deployment_mode(&inputs(Some("   "), "localhost")),
            DeploymentMode::StaticOnly
        );
        assert_eq!(
            detect_deployment_mode(&inputs(Some("undefined"), "localhost")),
            DeploymentMode::StaticOnly
        );
    }

    #[test]
    fn test_placeholder_backend_is_static() {
        assert_eq!(
            detect_deployment_mode(&inputs(Some(BACKEND_URL_PLACEHOLDER), "localhost")),
            DeploymentMode::StaticOnly
        );
        assert_eq!(
            detect_deployment_mode(&inputs(Some("https://your-backend-url.com/"), "localhost")),
            DeploymentMode::StaticOnly
        );
    }

    #[test]
    fn test_production_without_backend_is_static() {
        let mut input = inputs(None, "example.com");
        input.build_mode = "production".to_string();

        assert_eq!(detect_deployment_mode(&input), DeploymentMode::StaticOnly);
    }

    #[test]
    fn test_production_with_backend_uses_backend() {
        let mut input = inputs(Some("https://api.example.com"), "example.com");
        input.build_mode = "production".to_string();

        assert_eq!(detect_deployment_mode(&input), DeploymentMode::HasBackend);
    }

    #[test]
    fn test_static_hosting_domains() {
        for host in [
            "asatish.github.io",
            "portfolio.netlify.app",
            "my-site.vercel.app",
            "site.pages.dev",
            "Portfolio.Surge.SH",
            "group.gitlab.io:443",
        ] {
            assert_eq!(
                detect_deployment_mode(&inputs(Some("https://api.example.com"), host)),
                DeploymentMode::StaticOnly,
                "{} should be static",
                host
            );
        }
    }

    #[test]
    fn test_lookalike_domain_is_not_static() {
        assert_eq!(
            detect_deployment_mode(&inputs(Some("https://api.example.com"), "notgithub.io.example.com")),
            DeploymentMode::HasBackend
        );
        assert_eq!(
            detect_deployment_mode(&inputs(Some("https://api.example.com"), "mygithub.io")),
            DeploymentMode::HasBackend
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let input = inputs(Some("https://api.example.com"), "example.com");
        let first = detect_deployment_mode(&input);

        for _ in 0..10 {
            assert_eq!(detect_deployment_mode(&input), first);
        }
    }
}
