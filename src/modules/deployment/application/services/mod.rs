mod deployment_detector;

pub use deployment_detector::{
    detect_deployment_mode, BACKEND_URL_PLACEHOLDER, STATIC_HOST_PATTERNS,
};
