//! Run configuration for initsys.
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{constants::AUTO, error::InitsysError, initsys::InitSystem};

/// Where the daemon executable lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BinDir {
    /// Probe the standard binary directories.
    #[default]
    Auto,
    /// Use this directory verbatim.
    Path(PathBuf),
}

impl FromStr for BinDir {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err("bindir cannot be empty".into()),
            AUTO => Ok(BinDir::Auto),
            path => Ok(BinDir::Path(PathBuf::from(path))),
        }
    }
}

/// Which init system to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitSysChoice {
    /// Guess from the host filesystem.
    #[default]
    Auto,
    /// Use this init system.
    Known(InitSystem),
}

impl FromStr for InitSysChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowercase = value.trim().to_ascii_lowercase();
        if lowercase == AUTO {
            return Ok(InitSysChoice::Auto);
        }
        InitSystem::from_str(&lowercase)
            .map(InitSysChoice::Known)
            .map_err(|_| {
                format!(
                    "invalid init system '{value}', must be one of: auto, systemd, rhel6, upstart, sysvinit, debian"
                )
            })
    }
}

/// Destination of the installed service definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    /// The init system's default service path.
    Auto,
    /// An explicit file path.
    Path(PathBuf),
}

impl FromStr for InstallTarget {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err("install target cannot be empty".into()),
            AUTO => Ok(InstallTarget::Auto),
            path => Ok(InstallTarget::Path(PathBuf::from(path))),
        }
    }
}

/// Fully parsed, read-only settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Suppress status messages.
    pub quiet: bool,
    /// Number of `--verbose` flags.
    pub verbose: u8,
    /// Print intended actions instead of performing them.
    pub dry_run: bool,
    /// Daemon binary directory.
    pub bindir: BinDir,
    /// Target init system.
    pub init_system: InitSysChoice,
    /// Directory holding the service templates; `None` means next to the executable.
    pub templates: Option<PathBuf>,
    /// Stop the running service.
    pub stop: bool,
    /// Install the service definition, and where.
    pub install: Option<InstallTarget>,
    /// Register the service to start at boot.
    pub enable: bool,
    /// Unregister and remove the service definition.
    pub uninstall: bool,
    /// Start the service.
    pub start: bool,
    /// Never colourise output.
    pub no_color: bool,
}

impl RunConfig {
    /// Whether any lifecycle action was requested.
    pub fn has_action(&self) -> bool {
        self.install.is_some() || self.start || self.stop || self.uninstall
    }
}

/// Optional defaults read from a YAML file passed with `--config`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default for `--bindir`.
    pub bindir: Option<String>,
    /// Default for `--initsys`.
    pub initsys: Option<String>,
    /// Default for `--templates`.
    pub templates: Option<PathBuf>,
    /// Default for `--no-color`.
    pub no_color: Option<bool>,
}

/// Loads and parses the defaults file.
pub fn load_file_config(path: &Path) -> Result<FileConfig, InitsysError> {
    let content = fs::read_to_string(path).map_err(|source| InitsysError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|source| InitsysError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
