pub mod cli;
pub mod load_config;

pub use cli::{describe_failure, run, Cli, RunOutcome};
