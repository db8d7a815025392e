//! Command-line interface for pyro
//! This binary parses Robot Framework test files and prints what the parser made of them.
//!
//! Usage:
//!   pyro `<path>` [--dialect `<dialect>`] [--config `<file>`] [--format `<format>`] [--verbose]
//!
//! Without `--config`, a `pyro.toml` in the working directory is layered over
//! the built-in defaults when present.

mod transforms;

use clap::{Arg, ArgAction, Command};
use pyro_config::{Loader, PyroConfig};
use pyro_parser::robot::loader::DocumentLoader;
use pyro_parser::robot::tokenizing::Dialect;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use transforms::{execute_format, RenderOptions, AVAILABLE_FORMATS, DEFAULT_FORMAT};

const LOCAL_CONFIG: &str = "pyro.toml";

fn main() {
    let matches = Command::new("pyro")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Robot Framework test files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the test file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .short('d')
                .help("Cell dialect: tab, space or unsupported (default: from the file extension)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help(format!("Output format: {}", AVAILABLE_FORMATS.join(", ")))
                .default_value(DEFAULT_FORMAT),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config, matches.get_flag("verbose"));

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Missing path");
        std::process::exit(1);
    };
    let dialect = match matches.get_one::<String>("dialect") {
        Some(name) => name.parse::<Dialect>().unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        }),
        None => config.dialect_for_path(path),
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORMAT);

    handle_execute_command(path, dialect, format, &config);
}

fn load_config(explicit: Option<&String>) -> Result<PyroConfig, pyro_config::Error> {
    let loader = match explicit {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    loader.build()
}

/// `--verbose` wins over `RUST_LOG`, which wins over `logging.level`.
fn init_logging(config: &PyroConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the execute command
fn handle_execute_command(path: &str, dialect: Dialect, format: &str, config: &PyroConfig) {
    let loader = DocumentLoader::from_path(path)
        .map(|loader| loader.with_dialect(dialect))
        .unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        });
    debug!(%path, %dialect, %format, "rendering");

    let options = RenderOptions {
        pretty_json: config.output.pretty_json,
    };
    let output = execute_format(&loader, format, options).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}
