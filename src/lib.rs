//! initsys installs, enables, starts, stops and uninstalls the service
//! definition of the pmtr daemon, adapting to whichever init system (systemd,
//! upstart, or one of the System V flavours) the host runs.

/// Lifecycle action executor.
pub mod actions;

/// CLI interface.
pub mod cli;

/// Run configuration.
pub mod config;

/// Fixed paths and markers.
pub mod constants;

/// Host probing.
pub mod detect;

/// Error handling.
pub mod error;

/// Init system table.
pub mod initsys;

/// Status output.
pub mod output;

/// External command invocation.
pub mod runner;

/// Service templates.
pub mod template;

/// Recording command runner shared by unit and integration tests.
pub mod test_utils;
