//! Lifecycle actions: stop, install, enable, uninstall and start.
//!
//! Actions always run in that fixed order, whatever combination was requested.
//! Nothing guards against contradictory requests: asking for both install and
//! uninstall writes the service file and then removes it again.
use std::{
    fs::{self, File, Permissions},
    io::Write,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    config::{InstallTarget, RunConfig},
    constants::{BINDIR_PLACEHOLDER, DAEMON_NAME},
    detect::{Detector, ResolvedPaths},
    error::InitsysError,
    initsys::Profile,
    output::Reporter,
    runner::CommandRunner,
    template,
};

/// Performs the requested actions against the resolved init system.
pub struct Executor<'a, R: CommandRunner> {
    config: &'a RunConfig,
    resolved: &'a ResolvedPaths,
    runner: &'a R,
    reporter: Reporter,
    root: PathBuf,
}

impl<'a, R: CommandRunner> Executor<'a, R> {
    /// Creates an executor that writes below `/`.
    pub fn new(
        config: &'a RunConfig,
        resolved: &'a ResolvedPaths,
        runner: &'a R,
        reporter: Reporter,
    ) -> Self {
        Self {
            config,
            resolved,
            runner,
            reporter,
            root: PathBuf::from("/"),
        }
    }

    /// Places the init system's default service paths below `root` instead of `/`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Runs every requested action in order, stopping at the first failure.
    pub fn run(&self) -> Result<(), InitsysError> {
        info!(
            "Using init system {} with {DAEMON_NAME} in {}",
            self.resolved.init_system,
            self.resolved.bindir.display()
        );

        if self.config.stop {
            self.stop()?;
        }
        if let Some(target) = &self.config.install {
            self.install(target)?;
        }
        if self.config.enable {
            self.enable()?;
        }
        if self.config.uninstall {
            self.uninstall()?;
        }
        if self.config.start {
            self.start()?;
        }

        Ok(())
    }

    fn profile(&self) -> &'static Profile {
        self.resolved.init_system.profile()
    }

    fn service_path(&self) -> PathBuf {
        self.root
            .join(self.profile().service_path.trim_start_matches('/'))
    }

    fn stop(&self) -> Result<(), InitsysError> {
        let command = self.profile().stop;
        if self.config.dry_run {
            self.reporter.plan(&format!("would run: {command}"));
            return Ok(());
        }
        self.run_command(command)?;
        self.reporter.status(&format!("Stopped {DAEMON_NAME}"));
        Ok(())
    }

    fn install(&self, target: &InstallTarget) -> Result<(), InitsysError> {
        let kind = self.resolved.init_system;
        let mode = self.profile().mode;
        let target = match target {
            InstallTarget::Auto => self.service_path(),
            InstallTarget::Path(path) => path.clone(),
        };
        let dir = template::template_dir(self.config.templates.as_deref())?;

        if self.config.dry_run {
            self.reporter.plan(&format!(
                "would write {} (mode {mode:04o}) from {} replacing {BINDIR_PLACEHOLDER} with {}",
                target.display(),
                template::template_path(&dir, kind).display(),
                self.resolved.bindir.display()
            ));
            return Ok(());
        }

        let content = template::render(&template::load(&dir, kind)?, &self.resolved.bindir);
        write_service_file(&target, &content, mode)?;
        self.reporter.status(&format!(
            "Installed {kind} service file {}",
            target.display()
        ));
        Ok(())
    }

    fn enable(&self) -> Result<(), InitsysError> {
        let command = self.profile().enable;
        if self.config.dry_run {
            self.reporter.plan(&format!("would run: {command}"));
            return Ok(());
        }
        self.run_command(command)?;
        self.reporter.status(&format!("Enabled {DAEMON_NAME}"));
        Ok(())
    }

    fn uninstall(&self) -> Result<(), InitsysError> {
        let command = self.profile().disable;
        let path = self.service_path();
        if self.config.dry_run {
            self.reporter.plan(&format!("would run: {command}"));
            self.reporter
                .plan(&format!("would remove {}", path.display()));
            return Ok(());
        }

        self.run_command(command)?;
        fs::remove_file(&path).map_err(|source| InitsysError::io("remove", &path, source))?;
        self.reporter.status(&format!(
            "Disabled {DAEMON_NAME} and removed {}",
            path.display()
        ));
        Ok(())
    }

    fn start(&self) -> Result<(), InitsysError> {
        let command = self.profile().start;
        if self.config.dry_run {
            self.reporter.plan(&format!("would run: {command}"));
            return Ok(());
        }
        self.run_command(command)?;
        self.reporter.status(&format!("Started {DAEMON_NAME}"));
        Ok(())
    }

    fn run_command(&self, command: &str) -> Result<(), InitsysError> {
        let status = self
            .runner
            .run(command)
            .map_err(|source| InitsysError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InitsysError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Resolves the host with `detector`, then runs the requested actions below
/// the detector's root. Nothing runs when detection fails.
pub fn execute<R: CommandRunner>(
    config: &RunConfig,
    detector: &Detector,
    runner: &R,
    reporter: Reporter,
) -> Result<(), InitsysError> {
    let resolved = detector.resolve(&config.bindir, &config.init_system)?;
    Executor::new(config, &resolved, runner, reporter)
        .with_root(detector.root())
        .run()
}

fn write_service_file(target: &Path, content: &str, mode: u32) -> Result<(), InitsysError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| InitsysError::io("create directory", parent, source))?;
    }

    {
        let mut file =
            File::create(target).map_err(|source| InitsysError::io("create", target, source))?;
        file.write_all(content.as_bytes())
            .map_err(|source| InitsysError::io("write", target, source))?;
    }

    fs::set_permissions(target, Permissions::from_mode(mode))
        .map_err(|source| InitsysError::io("chmod", target, source))?;
    debug!("Wrote {} with mode {mode:04o}", target.display());
    Ok(())
}
