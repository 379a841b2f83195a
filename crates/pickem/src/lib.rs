pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::PickemConfig;
pub use database::Database;
pub use error::{PickemError, Result};
