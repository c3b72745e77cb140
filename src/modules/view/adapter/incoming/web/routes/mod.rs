mod get_entry;
mod get_themes;
mod get_view;
mod navigate;

pub use get_entry::{admin_entry_handler, index_handler};
pub use get_themes::{
    __path_get_theme_handler, __path_get_themes_handler, get_theme_handler, get_themes_handler,
};
pub use get_view::{__path_get_view_handler, get_view_handler};
pub use navigate::{
    preview_theme_handler, request_admin_handler, request_showcase_handler, select_theme_handler,
};
