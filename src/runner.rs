//! External process invocation.
use std::{
    io,
    process::{Command, ExitStatus},
};

use tracing::info;

/// Runs a shell command line and reports how it exited.
pub trait CommandRunner {
    /// Runs `command` to completion.
    fn run(&self, command: &str) -> io::Result<ExitStatus>;
}

/// Runs commands through `sh -c` with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> io::Result<ExitStatus> {
        info!("Running `{command}`");
        Command::new("sh").arg("-c").arg(command).status()
    }
}
