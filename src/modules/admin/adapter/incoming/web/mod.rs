pub mod extractors;
mod pages;
pub mod routes;
mod templates;

pub use pages::{contact_notice, render_admin_page, AdminTab, DashboardSource};
