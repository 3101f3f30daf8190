//! Zuul CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use zuul::{Game, GameConfig, OutputFormat, ZuulError};

/// Options parsed from the command line. Each one overrides the matching
/// field of the config file.
#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    world: Option<PathBuf>,
    time: Option<i64>,
    json: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zuul: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ZuulError> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.show_help = true,
            "-V" | "--version" => options.show_version = true,
            "-v" | "--verbose" => options.verbose = true,
            "--json" => options.json = true,
            "--config" => options.config = Some(value(&mut args, "--config")?.into()),
            "--world" => options.world = Some(value(&mut args, "--world")?.into()),
            "--time" => {
                let raw = value(&mut args, "--time")?;
                let time = raw
                    .parse()
                    .map_err(|_| ZuulError::Usage(format!("invalid --time value: {raw}")))?;
                options.time = Some(time);
            }
            other => {
                return Err(ZuulError::Usage(format!(
                    "unknown option: {other} (try --help)"
                )));
            }
        }
    }

    Ok(options)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ZuulError> {
    args.next()
        .ok_or_else(|| ZuulError::Usage(format!("{flag} requires a value")))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: impl Iterator<Item = String>) -> Result<(), ZuulError> {
    let options = parse_args(args)?;

    if options.show_help {
        print_help();
        return Ok(());
    }
    if options.show_version {
        println!("zuul {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(options.verbose);

    let mut config = match &options.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(world) = options.world {
        config.world = Some(world);
    }
    if let Some(time) = options.time {
        config.timer.initial = time;
    }
    if options.json {
        config.output = OutputFormat::Json;
    }

    let mut game = Game::builder().config(&config)?.build()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let state = game.run(stdin.lock(), &mut stdout)?;
    tracing::info!(%state, "exiting");
    Ok(())
}

fn print_help() {
    println!(
        "zuul {version}
A small text adventure.

USAGE:
    zuul [OPTIONS]

OPTIONS:
    --config <FILE>   Read settings from a JSON config file
    --world <FILE>    Play a world from a JSON definition file
    --time <N>        Number of time units available (default 60)
    --json            Write one JSON turn result per line
    -v, --verbose     Log at debug level (RUST_LOG overrides)
    -h, --help        Show this help
    -V, --version     Show the version

COMMANDS IN GAME:
    go <direction>    Walk through an exit
    mark              Remember this room
    back              Return to the remembered room
    help              List command words
    quit              Leave the game",
        version = env!("CARGO_PKG_VERSION")
    );
}
