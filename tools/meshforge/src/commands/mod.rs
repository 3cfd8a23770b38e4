//! CLI subcommand implementations.

pub mod create;
pub mod hardfork;
pub mod search;
