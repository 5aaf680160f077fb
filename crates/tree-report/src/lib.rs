//! Library side of the `tree-report` command.
//!
//! - [`entry`]: filesystem entries as a reportree source
//! - [`commands`]: the `dir`, `parse` and `check` subcommands
//! - [`config`]: the YAML configuration file

pub mod commands;
pub mod config;
pub mod entry;
