pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod service;

pub use config::AppConfig;
pub use error::AppError;
pub use service::{AppState, create_app};
