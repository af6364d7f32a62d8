use clap::Parser;
use regcalc::{CalcConfig, Error, EvaluationMode, Evaluator};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMONSTRATION: &str = "(1 + 2) * 3 * ((4 + 50 + ONEX) * (TWO + ONE))";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate
    #[arg(default_value = DEMONSTRATION)]
    expression: String,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra register binding, NAME=VALUE (repeatable)
    #[arg(short, long = "symbol", value_name = "NAME=VALUE")]
    symbols: Vec<String>,

    /// Reject input that is not fully consumed
    #[arg(long)]
    complete: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_binding(binding: &str) -> Result<(String, i64), Error> {
    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| Error::InvalidSymbolBinding(binding.to_string()))?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidSymbolBinding(binding.to_string()))?;
    Ok((name.trim().to_string(), value))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => CalcConfig::from_file(path)?,
        None => CalcConfig::default(),
    };

    info!("config loaded.");

    for binding in &cli.symbols {
        let (name, value) = parse_binding(binding)?;
        config.symbols.insert(name, value);
    }
    if cli.complete {
        config.mode = EvaluationMode::Complete;
    }

    debug!("config: {:?}", config);

    let evaluator = Evaluator::from_config(&config)?;
    let evaluation = evaluator.evaluate(&cli.expression)?;

    println!("{}", evaluation);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(parse_binding("TEN=10").unwrap(), ("TEN".to_string(), 10));
        assert_eq!(parse_binding(" X = -4 ").unwrap(), ("X".to_string(), -4));
    }

    #[test]
    fn test_parse_binding_rejects_malformed() {
        for binding in ["TEN", "TEN=", "TEN=ten", "=1=2"] {
            assert_eq!(
                parse_binding(binding),
                Err(Error::InvalidSymbolBinding(binding.to_string()))
            );
        }
    }
}
