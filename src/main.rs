//! Threatscan CLI
//!
//! Scans a single input (argument or stdin) and reports the verdict.
//! Exits non-zero when the input is suspect, so it composes with shell
//! pipelines and pre-commit style hooks.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use threatscan::{threshold, Category, ScoringPolicy, ThreatDetector};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "threatscan")]
#[command(about = "Signature-based threat detection for untrusted input")]
#[command(version)]
struct Args {
    /// Input to scan; reads stdin when omitted
    input: Option<String>,

    /// Suspicion threshold: LOW, MEDIUM, HIGH, or a literal value
    #[arg(short, long, env = "THREATSCAN_THRESHOLD", default_value = "MEDIUM")]
    threshold: String,

    /// Per-category weight override, e.g. --weight XSS=3.0 (repeatable)
    #[arg(short, long = "weight", value_name = "CATEGORY=WEIGHT")]
    weights: Vec<String>,

    /// Emit the full result as JSON instead of a summary line
    #[arg(short, long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_policy(args: &Args) -> Result<ScoringPolicy> {
    let threshold_value = match args.threshold.parse::<f64>() {
        Ok(v) => v,
        Err(_) => threshold::resolve(&args.threshold),
    };

    let mut policy = ScoringPolicy::with_defaults().with_threshold(threshold_value);
    for spec in &args.weights {
        let Some((name, value)) = spec.split_once('=') else {
            bail!("invalid weight override '{spec}', expected CATEGORY=WEIGHT");
        };
        let category: Category = name.trim().parse()?;
        let weight: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("invalid weight value in '{spec}'"))?;
        policy = policy.with_weight(category, weight);
    }
    Ok(policy)
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(input) => Ok(input.clone()),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let policy = build_policy(args)?;
    debug!(threshold = policy.threshold(), "policy built");

    let detector = ThreatDetector::with_defaults(policy);
    let input = read_input(args)?;
    let result = detector.scan_str(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.to_map())?);
    } else {
        let verdict = if result.suspect { "SUSPECT" } else { "clean" };
        println!("{verdict} (score {:.2})", result.score);
        for (category, codes) in &result.hits {
            println!("  {category}: {}", codes.join(", "));
        }
    }

    Ok(result.suspect)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(suspect) => {
            if suspect {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
