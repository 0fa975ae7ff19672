pub mod command;
pub mod command_handler;
pub mod config;
pub mod context;
pub mod controller;
pub mod dto;
pub mod error;
pub mod players;
pub mod query;
pub mod query_handler;

pub use config::PlayerConfig;
pub use controller::PlayerController;
pub use error::{AppError, AppResult};
