use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use flat_copy::{
    run_flat_copy, AppConfig, CopyReport, DestinationPolicy, FlatCopyConfig, FlatCopyError,
    Preset, EXIT_MISSING_DESTINATION,
};
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

const PRESET_ENV: &str = "FLAT_COPY_PRESET";
const DEST_ENV: &str = "FLAT_COPY_DEST";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let matches = build_cli().get_matches();

    // .env may carry RUST_LOG, so it is read before the subscriber exists
    let dotenv_loaded = load_environment_variables();

    let log_flag = matches.get_one::<String>("log-level").cloned();
    initialize_logging(log_flag.as_deref())?;
    if !dotenv_loaded {
        debug!("No .env file found, using system environment variables");
    }

    let log_level = log_flag.unwrap_or_else(|| AppConfig::default().log_level);
    let config = create_app_config(&matches, log_level)?;

    run_application(config).await
}

fn build_cli() -> Command {
    Command::new("flat-copy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy the files of a directory into a fixed destination folder")
        .arg(
            Arg::new("preset")
                .long("preset")
                .value_name("NAME")
                .help("Built-in variant: excalidraw-scripts, mirror or strict"),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Destination directory (overrides the preset)"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Source directory (defaults to the working directory)"),
        )
        .arg(
            Arg::new("create-missing")
                .long("create-missing")
                .help("Create the destination when it does not exist")
                .action(ArgAction::SetTrue)
                .overrides_with("require-existing"),
        )
        .arg(
            Arg::new("require-existing")
                .long("require-existing")
                .help("Stop without copying when the destination does not exist")
                .action(ArgAction::SetTrue)
                .overrides_with("create-missing"),
        )
        .arg(
            Arg::new("exclude-self")
                .long("exclude-self")
                .help("Skip the running executable's own file")
                .action(ArgAction::SetTrue)
                .overrides_with("no-exclude-self"),
        )
        .arg(
            Arg::new("no-exclude-self")
                .long("no-exclude-self")
                .help("Copy every file, including the running executable")
                .action(ArgAction::SetTrue)
                .overrides_with("exclude-self")
                .conflicts_with("exclude-name"),
        )
        .arg(
            Arg::new("exclude-name")
                .long("exclude-name")
                .value_name("NAME")
                .value_parser(clap::value_parser!(OsString))
                .help("File name to skip instead of the executable's name"),
        )
        .arg(
            Arg::new("rename-js")
                .long("rename-js")
                .help("Append .md to the destination name of .js files")
                .action(ArgAction::SetTrue)
                .overrides_with("no-rename-js"),
        )
        .arg(
            Arg::new("no-rename-js")
                .long("no-rename-js")
                .help("Keep .js file names unchanged")
                .action(ArgAction::SetTrue)
                .overrides_with("rename-js"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the copy report as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)"),
        )
}

/// Resolve a `--flag` / `--no-flag` pair into an optional override
fn flag_override(matches: &ArgMatches, on: &str, off: &str) -> Option<bool> {
    if matches.get_flag(on) {
        Some(true)
    } else if matches.get_flag(off) {
        Some(false)
    } else {
        None
    }
}

fn running_executable_name() -> Option<OsString> {
    env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_os_string()))
}

/// Build the application configuration: preset first, then environment, then flags
fn create_app_config(matches: &ArgMatches, log_level: String) -> Result<AppConfig> {
    let preset = match matches.get_one::<String>("preset").cloned() {
        Some(name) => name,
        None => env::var(PRESET_ENV).unwrap_or_default(),
    };
    let preset = if preset.is_empty() {
        Preset::default()
    } else {
        preset.parse::<Preset>().map_err(anyhow::Error::msg)?
    };

    let source = match matches.get_one::<PathBuf>("source") {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to determine the working directory")?,
    };

    let mut flat_copy = FlatCopyConfig::from_preset(preset, source, running_executable_name());

    if let Some(dest) = matches.get_one::<PathBuf>("dest") {
        flat_copy.destination = dest.clone();
    } else if let Some(dest) = env::var_os(DEST_ENV).filter(|value| !value.is_empty()) {
        flat_copy.destination = PathBuf::from(dest);
    }

    match flag_override(matches, "create-missing", "require-existing") {
        Some(true) => flat_copy.policy = DestinationPolicy::CreateIfMissing,
        Some(false) => flat_copy.policy = DestinationPolicy::RequireExisting,
        None => {}
    }

    if let Some(name) = matches.get_one::<OsString>("exclude-name") {
        flat_copy.exclude_name = Some(name.clone());
    } else {
        match flag_override(matches, "exclude-self", "no-exclude-self") {
            Some(true) => flat_copy.exclude_name = running_executable_name(),
            Some(false) => flat_copy.exclude_name = None,
            None => {}
        }
    }

    if let Some(rename) = flag_override(matches, "rename-js", "no-rename-js") {
        flat_copy.rename_js = rename;
    }

    Ok(AppConfig {
        preset,
        flat_copy,
        json_report: matches.get_flag("json"),
        log_level,
    })
}

fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Build the log filter. `RUST_LOG` is honored as is; `--log-level` is
/// layered on top only when given. With neither, the default is `warn`.
fn log_filter(log_flag: Option<&str>, rust_log: Option<&str>) -> Result<EnvFilter> {
    let filter = match rust_log.filter(|value| !value.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {} value: {}", EnvFilter::DEFAULT_ENV, directives))?,
        None if log_flag.is_none() => EnvFilter::new(AppConfig::default().log_level),
        None => EnvFilter::default(),
    };

    Ok(match log_flag {
        Some(level) => filter.add_directive(parse_level(level).into()),
        None => filter,
    })
}

/// Initialize structured logging with tracing, on stderr so stdout stays the console echo
fn initialize_logging(log_flag: Option<&str>) -> Result<()> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(log_flag, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load a .env file if one exists; returns whether one was found
fn load_environment_variables() -> bool {
    dotenvy::dotenv().is_ok()
}

async fn run_application(config: AppConfig) -> Result<ExitCode> {
    info!("Starting flat copy with preset {}", config.preset);
    debug!("Configuration: {:#?}", config);

    let json_report = config.json_report;
    let flat_copy = config.flat_copy;

    let outcome = tokio::task::spawn_blocking(move || {
        let stdout = io::stdout();
        let mut progress = stdout.lock();
        run_flat_copy(&flat_copy, &mut progress)
    })
    .await
    .context("Copy task panicked")?;

    match outcome {
        Ok(report) => {
            if json_report {
                print_json_report(&report)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ FlatCopyError::MissingDestination { .. }) => {
            warn!("Aborting before copying anything");
            println!("{}", err);
            Ok(ExitCode::from(EXIT_MISSING_DESTINATION))
        }
        Err(err) => Err(err).context("Flat copy failed"),
    }
}

fn print_json_report(report: &CopyReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize copy report")?;
    println!("{}", json);
    Ok(())
}
