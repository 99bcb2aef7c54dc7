//! Domain model types (pure).

pub mod error;
pub mod image;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, EmptyQueryError, FetchError, TransportError};
pub use image::{ImageRecord, PageResult, PAGE_SIZE};
pub use key_action::KeyAction;
