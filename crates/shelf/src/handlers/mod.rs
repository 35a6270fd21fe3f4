pub mod error;
pub mod health;
pub mod objects;

pub use error::AppError;
