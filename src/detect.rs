//! Host probing: where the daemon binary lives and which init system runs.
use std::{
    fs,
    path::{Path, PathBuf},
};

use nix::unistd::{AccessFlags, access};
use tracing::debug;

use crate::{
    config::{BinDir, InitSysChoice},
    constants::{
        BINDIR_CANDIDATES, CHKCONFIG, DAEMON_NAME, DEBIAN_VERSION, INIT_D, REDHAT_RELEASE,
        SBIN_INIT, SYSTEM_RELEASE, UPSTART_DIR,
    },
    error::InitsysError,
    initsys::InitSystem,
};

/// Values produced by detection and consumed by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory containing the daemon executable.
    pub bindir: PathBuf,
    /// Init system to drive.
    pub init_system: InitSystem,
}

/// Probes the filesystem below `root`.
///
/// Production code uses `/`; tests point the detector at a scratch tree.
/// Resolved paths are always reported relative to `/`, never prefixed with
/// the probe root.
#[derive(Debug, Clone)]
pub struct Detector {
    root: PathBuf,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Detector {
    /// Creates a detector that probes below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory every probe is made relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves both the binary directory and the init system.
    pub fn resolve(
        &self,
        bindir: &BinDir,
        init_system: &InitSysChoice,
    ) -> Result<ResolvedPaths, InitsysError> {
        Ok(ResolvedPaths {
            bindir: self.resolve_bindir(bindir)?,
            init_system: self.resolve_init_system(init_system)?,
        })
    }

    /// Returns the explicit directory, or the first candidate holding an
    /// executable named after the daemon.
    pub fn resolve_bindir(&self, bindir: &BinDir) -> Result<PathBuf, InitsysError> {
        if let BinDir::Path(path) = bindir {
            return Ok(path.clone());
        }

        for candidate in BINDIR_CANDIDATES {
            let binary = self.probe_path(candidate).join(DAEMON_NAME);
            if is_executable_file(&binary) {
                debug!("Found {DAEMON_NAME} in {candidate}");
                return Ok(PathBuf::from(candidate));
            }
        }

        Err(InitsysError::BinaryNotFound {
            daemon: DAEMON_NAME,
            searched: BINDIR_CANDIDATES.join(", "),
        })
    }

    /// Returns the explicit init system, or guesses one from the host.
    pub fn resolve_init_system(
        &self,
        choice: &InitSysChoice,
    ) -> Result<InitSystem, InitsysError> {
        match choice {
            InitSysChoice::Known(kind) => Ok(*kind),
            InitSysChoice::Auto => self.detect_init_system(),
        }
    }

    /// Ordered heuristic chain; the first matching probe wins.
    pub fn detect_init_system(&self) -> Result<InitSystem, InitsysError> {
        let detected = if self.init_links_to_systemd() {
            Some(InitSystem::Systemd)
        } else if self.probe_path(UPSTART_DIR).is_dir() {
            Some(InitSystem::Upstart)
        } else if self.probe_path(REDHAT_RELEASE).exists() {
            Some(InitSystem::Rhel6)
        } else if self.probe_path(DEBIAN_VERSION).exists() {
            Some(InitSystem::Debian)
        } else if self.probe_path(SYSTEM_RELEASE).exists()
            && is_executable_file(&self.probe_path(CHKCONFIG))
        {
            // RHEL lookalikes (Amazon Linux) still ship the legacy tooling.
            Some(InitSystem::Rhel6)
        } else if self.probe_path(INIT_D).is_dir() {
            Some(InitSystem::Sysvinit)
        } else {
            None
        };

        match detected {
            Some(kind) => {
                debug!("Detected init system: {kind}");
                Ok(kind)
            }
            None => Err(InitsysError::InitSystemUndetected),
        }
    }

    fn init_links_to_systemd(&self) -> bool {
        match fs::read_link(self.probe_path(SBIN_INIT)) {
            Ok(target) => {
                debug!("{SBIN_INIT} links to {}", target.display());
                target.to_string_lossy().contains("systemd")
            }
            Err(_) => false,
        }
    }

    fn probe_path(&self, absolute: &str) -> PathBuf {
        self.root.join(absolute.trim_start_matches('/'))
    }
}

fn is_executable_file(path: &Path) -> bool {
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}
