//! Command-line interface for initsys.
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::{
    config::{BinDir, FileConfig, InitSysChoice, InstallTarget, RunConfig, load_file_config},
    error::InitsysError,
};

/// Command-line interface for initsys.
#[derive(Debug, Parser)]
#[command(name = "initsys", disable_help_flag = true)]
#[command(
    about = "Install, enable, start, stop or uninstall the pmtr service for the host init system",
    long_about = None
)]
pub struct Cli {
    /// Suppress status messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Shorthand for --install-service auto --enable-service --start-service.
    #[arg(short, long)]
    pub auto: bool,

    /// Print what would be done without doing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory containing the pmtr executable.
    #[arg(short, long, value_name = "auto|DIR")]
    pub bindir: Option<BinDir>,

    /// Init system to target.
    #[arg(
        short,
        long,
        value_name = "auto|systemd|sysvinit|debian|upstart|rhel6"
    )]
    pub initsys: Option<InitSysChoice>,

    /// Directory holding the service.<initsys> templates.
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// YAML file with default settings.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start the service.
    #[arg(long)]
    pub start_service: bool,

    /// Enable the service at boot.
    #[arg(long)]
    pub enable_service: bool,

    /// Stop the service.
    #[arg(long)]
    pub stop_service: bool,

    /// Install the service definition (to the init system's default path when `auto`).
    #[arg(
        long,
        value_name = "auto|PATH",
        num_args = 0..=1,
        default_missing_value = "auto"
    )]
    pub install_service: Option<InstallTarget>,

    /// Disable the service and remove its definition.
    #[arg(long)]
    pub uninstall_service: bool,

    /// Disable ANSI colors in output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print usage.
    #[arg(short, long)]
    pub help: bool,
}

impl Cli {
    /// Reads the `--config` file, if any, and builds the run configuration.
    /// `--help` wins before the file is touched.
    pub fn load_config(self) -> Result<RunConfig, InitsysError> {
        if self.help {
            return Err(InitsysError::Usage(usage()));
        }

        let file = match &self.config {
            Some(path) => load_file_config(path)?,
            None => FileConfig::default(),
        };
        self.into_config(file)
    }

    /// Turns parsed flags plus file defaults into the immutable run configuration.
    pub fn into_config(self, file: FileConfig) -> Result<RunConfig, InitsysError> {
        if self.help {
            return Err(InitsysError::Usage(usage()));
        }

        let bindir = match (self.bindir, file.bindir) {
            (Some(bindir), _) => bindir,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|message| InitsysError::ConfigValue { key: "bindir", message })?,
            (None, None) => BinDir::Auto,
        };

        let init_system = match (self.initsys, file.initsys) {
            (Some(choice), _) => choice,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|message| InitsysError::ConfigValue { key: "initsys", message })?,
            (None, None) => InitSysChoice::Auto,
        };

        let install = self
            .install_service
            .or_else(|| self.auto.then_some(InstallTarget::Auto));

        let config = RunConfig {
            quiet: self.quiet,
            verbose: self.verbose,
            dry_run: self.dry_run,
            bindir,
            init_system,
            templates: self.templates.or(file.templates),
            stop: self.stop_service,
            install,
            enable: self.enable_service || self.auto,
            uninstall: self.uninstall_service,
            start: self.start_service || self.auto,
            no_color: self.no_color || file.no_color.unwrap_or(false),
        };

        if !config.has_action() {
            return Err(InitsysError::Usage(format!(
                "nothing to do: request --install-service, --start-service, --stop-service or --uninstall-service (or --auto)\n\n{}",
                usage()
            )));
        }

        Ok(config)
    }
}

/// Rendered usage text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Parses process arguments without letting clap exit on its own.
pub fn parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
