//! CLI subcommand implementations.

pub mod fetch;
