use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use initsys::{
    actions::execute,
    cli::parse_args,
    config::RunConfig,
    detect::Detector,
    error::{InitsysError, USAGE_EXIT_CODE},
    output::Reporter,
    runner::ShellRunner,
};

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err.render());
            eprintln!("{}", initsys::cli::usage());
            return ExitCode::from(USAGE_EXIT_CODE as u8);
        }
    };

    let config = match args.load_config() {
        Ok(config) => config,
        Err(InitsysError::Usage(message)) => {
            eprintln!("{message}");
            return ExitCode::from(USAGE_EXIT_CODE as u8);
        }
        Err(err) => return fail(&err),
    };

    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn init_logging(config: &RunConfig) {
    let default_level = if config.quiet {
        "error"
    } else {
        match config.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!config.no_color)
        .try_init();
}

fn run(config: &RunConfig) -> Result<(), InitsysError> {
    let reporter = Reporter::for_stdout(config.quiet, config.no_color);
    execute(config, &Detector::default(), &ShellRunner, reporter)
}

fn fail(err: &InitsysError) -> ExitCode {
    eprintln!("initsys: {err}");
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
