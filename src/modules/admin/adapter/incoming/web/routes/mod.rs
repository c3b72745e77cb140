mod login;
mod logout;
mod message_status;
mod update_credentials;
mod upload_photo;

pub use login::admin_login_handler;
pub use logout::admin_logout_handler;
pub use message_status::set_message_status_handler;
pub use update_credentials::update_credentials_handler;
pub use upload_photo::{__path_upload_photo_handler, upload_photo_handler};
