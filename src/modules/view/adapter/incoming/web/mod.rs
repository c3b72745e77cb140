mod pages;
pub mod routes;
mod templates;

pub use pages::render_entry;
