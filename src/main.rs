use anyhow::Result;
use clap::Parser;
use signsum::config::Config;
use signsum::{Evaluation, Sign, batch};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "signsum",
    about = "Sum two integers that share a strict sign, or report no result"
)]
struct Cli {
    /// Path to config file (signsum.toml is read when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Sum two strictly negative integers
    Negative {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Sum two strictly positive integers
    Positive {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Evaluate every `sign a b` line of a file
    Batch {
        /// Input file, one case per line
        file: PathBuf,
    },
}

const DEFAULT_CONFIG: &str = "signsum.toml";

/// An explicit path must load; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG))?,
        None => {
            debug!("no {DEFAULT_CONFIG}, using defaults");
            Config::default()
        }
    };
    config.validate()?;
    Ok(config)
}

fn render(eval: &Evaluation, json: bool, no_result: &str) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(eval)?);
    }
    Ok(match eval.sum {
        Some(sum) => sum.to_string(),
        None => no_result.to_string(),
    })
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("signsum=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let json = cli.json || config.output.json;
    let no_result = config.output.no_result.as_str();

    match cli.command {
        Command::Negative { a, b } => {
            let eval = Evaluation::new(Sign::Negative, a, b);
            println!("{}", render(&eval, json, no_result)?);
        }
        Command::Positive { a, b } => {
            let eval = Evaluation::new(Sign::Positive, a, b);
            println!("{}", render(&eval, json, no_result)?);
        }
        Command::Batch { file } => {
            let evals = batch::evaluate_file(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&evals)?);
            } else {
                for eval in &evals {
                    println!(
                        "{} {} {} = {}",
                        eval.sign,
                        eval.a,
                        eval.b,
                        render(eval, false, no_result)?
                    );
                }
            }
        }
    }
    Ok(())
}
