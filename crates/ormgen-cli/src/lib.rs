//! ormgen command-line front end.

pub mod config;

pub use config::Args;
