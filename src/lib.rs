//! AgentGit: capture page content as labeled snapshots ("commits") and keep
//! the most recent ones in a local storage area.
//!
//! The library half of the `agentgit` binary: bootstrap (config, tracing,
//! wiring) and the command-line front end.

pub mod bootstrap;
pub mod cli;
