use std::{
    cell::RefCell,
    io,
    os::unix::process::ExitStatusExt,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use crate::runner::CommandRunner;

/// One recorded command together with whether the watched path existed when it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub watched_existed: bool,
}

/// Records commands instead of running them. Every command succeeds unless
/// it matches the one registered with [`RecordingRunner::failing`].
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Call>>,
    watched: Option<PathBuf>,
    fail: Option<(String, i32)>,
}

impl RecordingRunner {
    /// Also records whether `path` exists at the time of each call.
    pub fn watching(path: &Path) -> Self {
        Self {
            watched: Some(path.to_path_buf()),
            ..Self::default()
        }
    }

    /// Makes `command` exit with `code`.
    pub fn failing(mut self, command: &str, code: i32) -> Self {
        self.fail = Some((command.to_string(), code));
        self
    }

    /// Commands in the order they ran.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.command.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> io::Result<ExitStatus> {
        let watched_existed = self.watched.as_deref().is_some_and(Path::exists);
        self.calls.borrow_mut().push(Call {
            command: command.to_string(),
            watched_existed,
        });

        let code = match &self.fail {
            Some((failing, code)) if failing == command => *code,
            _ => 0,
        };
        Ok(ExitStatus::from_raw(code << 8))
    }
}
