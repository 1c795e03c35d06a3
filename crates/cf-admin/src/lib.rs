//! cf-admin library
//!
//! Command definitions, logging setup and report rendering for the
//! `cf-admin` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod runner;


pub use cli::Cli;
pub use error::{AdminError, Result as AdminResult};
pub use runner::run;
