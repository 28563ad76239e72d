//! Utils library - configuration and small helpers shared by the binaries

pub mod config;
pub mod helpers;

pub use config::*;
pub use helpers::*;
