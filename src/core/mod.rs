pub mod logger;

pub mod config;
pub mod default_configuration;
pub mod error;


pub use crate::core::error::{Error, Result};
