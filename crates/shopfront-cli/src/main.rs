use anyhow::{Context, Result};
use shopfront_config::Config;
use shopfront_engine::{format_number, to_html};
use std::{env, fs, process};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("render") if args.len() == 3 => {
            let source = fs::read_to_string(&args[2])
                .with_context(|| format!("failed to read '{}'", args[2]))?;
            println!("{}", to_html(&source));
            Ok(())
        }
        Some("format") if args.len() == 3 || args.len() == 4 => {
            let value: f64 = args[2]
                .parse()
                .with_context(|| format!("'{}' is not a number", args[2]))?;
            let pattern = match args.get(3) {
                Some(pattern) => pattern.clone(),
                None => configured_pattern()?,
            };
            println!("{}", format_number(value, &pattern));
            Ok(())
        }
        _ => {
            eprintln!("Usage: {} render <file.md>", args[0]);
            eprintln!("       {} format <value> [pattern]", args[0]);
            process::exit(1);
        }
    }
}

/// The process-wide default pattern: from the config file when one
/// exists, the built-in default otherwise.
fn configured_pattern() -> Result<String> {
    match Config::load() {
        Ok(Some(config)) => Ok(config.number_format),
        Ok(None) => Ok(Config::default().number_format),
        Err(e) => Err(e).context("failed to load config file"),
    }
}
