//! phonetic main entry point
//!
//! With a name argument the name is spelled, one "L as in LIMA" line per
//! letter. Without one the built-in self test runs and prints its results.

use anyhow::Context;
use log::{debug, error, info};
use phonetic::config::{Config, OutputFormat};
use phonetic::{output, selftest, LetterTable, PhoneticError, Result};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: phonetic [--debug|-d] [--json] [--config PATH] [NAME]

Spell NAME using a phonetic code (NATO by default).
Without NAME, run the built-in self test.

Options:
  -d, --debug        Write debug logging to phonetic.log
      --json         Print the spelling as JSON
  -c, --config PATH  Read settings from PATH instead of ~/.phonetic.cfg
  -h, --help         Show this help
  -V, --version      Show version";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    debug: bool,
    json: bool,
    config: Option<PathBuf>,
    name: Option<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" | "-d" => parsed.debug = true,
            "--json" => parsed.json = true,
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| PhoneticError::Config(format!("{} needs a path", arg)))?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", phonetic::APP_NAME, phonetic::VERSION);
                process::exit(0);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option {}\n\n{}", arg, USAGE).into());
            }
            _ => {
                if parsed.name.is_some() {
                    return Err(format!("Only one name may be given\n\n{}", USAGE).into());
                }
                parsed.name = Some(arg);
            }
        }
    }

    Ok(parsed)
}

fn init_logging(debug_mode: bool) {
    if debug_mode {
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("phonetic.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: cannot open phonetic.log ({}), logging warnings to stderr", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!("phonetic {} debug logging enabled", phonetic::VERSION);
    } else {
        // RUST_LOG can raise the level
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .init();
    }
}

/// Name to spell, or `None` when the self test should run instead
fn name_to_spell(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// `--json` wins over the configured format
fn output_format(json_flag: bool, config: &Config) -> Result<OutputFormat> {
    if json_flag {
        Ok(OutputFormat::Json)
    } else {
        config.output_format()
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    init_logging(args.debug);

    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns whether everything that ran succeeded
fn run(args: Args) -> anyhow::Result<bool> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => Config::load().context("Failed to read ~/.phonetic.cfg")?,
    };
    debug!("Config loaded from {:?}", config.path());

    let name = match name_to_spell(args.name.as_deref()) {
        Some(name) => name,
        None => {
            info!("No name given, running self test");
            let report = selftest::run();
            print!("{}", report.render());
            return Ok(report.is_success());
        }
    };

    let table = LetterTable::from_words(config.words());
    let spelling = table
        .translate(name)
        .with_context(|| format!("Cannot spell {:?}", name))?;
    info!("Spelled {:?} as {} words", name, spelling.len());

    let format = output_format(args.json, &config)?;

    match format {
        OutputFormat::Text => {
            for line in output::text_lines(&spelling, &config.connector()) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", output::to_json(name, &spelling)?),
    }

    Ok(true)
}
