//! Core types and configuration for ipl-stats
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod error;
mod json_utils;
mod model;
mod result_set;
mod session;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use json_utils::*;
pub use model::*;
pub use result_set::*;
pub use session::*;
