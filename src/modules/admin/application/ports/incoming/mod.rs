mod admin_session_use_case;

pub use admin_session_use_case::{AdminSessionError, AdminSessionUseCase, DashboardLoad};
