//! User-specific store logic: entity hooks, id generation and errors.

pub mod entity;
pub mod error;
pub mod ids;

pub use error::*;
pub use ids::*;
