pub mod contacts;
pub mod error;
pub mod health;

pub use error::AppError;
