pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

pub use config::Catalog;
pub use error::{Result, SprayPlanError};
