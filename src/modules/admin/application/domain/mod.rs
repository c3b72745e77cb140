mod analytics;
mod contact_message;
mod credentials;
mod session;
mod upload;

pub use analytics::{ActivityEvent, AnalyticsSummary};
pub use contact_message::{ContactMessage, MessageStatus, MessageStatusParseError};
pub use credentials::{Credentials, CredentialsError};
pub use session::{Dashboard, SessionId, SessionState};
pub use upload::{PhotoUpload, UploadReceipt};
