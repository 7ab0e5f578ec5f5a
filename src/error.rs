//! Error handling for initsys.
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used for every usage error.
pub const USAGE_EXIT_CODE: i32 = 255;

/// Defines all possible errors that can abort an initsys run.
#[derive(Debug, Error)]
pub enum InitsysError {
    /// Bad flag combination, unknown flag or an explicit help request.
    #[error("{0}")]
    Usage(String),

    /// Error reading the defaults file.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        /// Path of the defaults file.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing YAML in the defaults file.
    #[error("Invalid YAML in config file {path:?}: {source}")]
    ConfigParse {
        /// Path of the defaults file.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: serde_yaml::Error,
    },

    /// A value in the defaults file is not acceptable.
    #[error("Invalid value for '{key}' in config file: {message}")]
    ConfigValue {
        /// Offending key.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// None of the candidate directories holds the daemon executable.
    #[error("could not find an executable '{daemon}' in {searched}; use --bindir to specify it")]
    BinaryNotFound {
        /// The daemon name that was searched for.
        daemon: &'static str,
        /// Comma separated list of searched directories.
        searched: String,
    },

    /// The host init system could not be guessed.
    #[error("could not detect the init system; use --initsys to specify it")]
    InitSystemUndetected,

    /// An external command ran but exited unsuccessfully.
    #[error("command `{command}` failed ({})", describe_code(.code))]
    CommandFailed {
        /// The shell command line.
        command: String,
        /// Exit code, `None` when the child was killed by a signal.
        code: Option<i32>,
    },

    /// An external command could not be launched at all.
    #[error("failed to execute `{command}`: {source}")]
    CommandSpawn {
        /// The shell command line.
        command: String,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// The template for the selected init system could not be read.
    #[error("failed to read template {path:?}: {source}")]
    TemplateRead {
        /// Template file path.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem operation on the service file failed.
    #[error("failed to {action} {path:?}: {source}")]
    Io {
        /// Short verb describing the operation (`write`, `chmod`, ...).
        action: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },
}

impl InitsysError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            InitsysError::Usage(_) => USAGE_EXIT_CODE,
            InitsysError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Shorthand for wrapping an `io::Error` with the failed operation.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InitsysError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
