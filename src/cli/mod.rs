pub mod commands;
pub mod ping;

pub use commands::Cli;
