pub mod analyze;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod report;
pub mod score;
pub mod types;

pub use error::{Result, RulemapError};
