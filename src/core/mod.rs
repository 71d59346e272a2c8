pub mod config;
pub mod error;

pub use config::QuestConfig;
pub use error::{QuestError, Result};
