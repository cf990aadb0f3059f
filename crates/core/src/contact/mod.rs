mod error;
mod messages;
mod requests;
mod types;

pub use error::ContactError;
pub use messages::{created_message, deleted_message, updated_message};
pub use requests::{ContactMessage, ContactPayload};
pub use types::Contact;
