use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use steptrace_engine::{closest_pair, closest_pair_trace, karatsuba, karatsuba_trace, Trace};

use crate::input;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "steptrace",
    about = "Run an instrumented divide-and-conquer algorithm and stream its step trace."
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct StreamOptions {
    /// Output format for events and the final result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the event stream and print only the result.
    #[arg(long)]
    quiet: bool,

    /// Abandon the trace after this many events (the rest of the
    /// computation never runs; no result is printed).
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Closest pair of points over a planar point set.
    ClosestPair {
        /// Input file: optional leading count line, then one `x y` pair per line.
        input: PathBuf,

        #[command(flatten)]
        options: StreamOptions,
    },
    /// Karatsuba multiplication of two non-negative integers.
    Karatsuba {
        /// Input file: exactly two decimal integers, one per line.
        input: PathBuf,

        #[command(flatten)]
        options: StreamOptions,
    },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::ClosestPair { input, options } => {
            let content = read_input(&input)?;
            let points = input::parse_points(&content);

            if options.quiet {
                return print_result(&closest_pair(&points), options.format);
            }
            if let Some(result) = stream_events(closest_pair_trace(points), &options)? {
                print_result(&result, options.format)?;
            }
            Ok(())
        }
        Command::Karatsuba { input, options } => {
            let content = read_input(&input)?;
            let (x, y) = input::parse_integers(&content)?;

            if options.quiet {
                return print_product(&karatsuba(&x, &y), options.format);
            }
            if let Some(product) = stream_events(karatsuba_trace(x, y), &options)? {
                print_product(&product, options.format)?;
            }
            Ok(())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Pull events one at a time and print them. Returns the final result, or
/// `None` when `--limit` abandoned the trace mid-stream.
fn stream_events<E, R>(mut trace: Trace<E, R>, options: &StreamOptions) -> Result<Option<R>>
where
    E: Serialize + Display,
{
    let mut seen = 0usize;
    while let Some(event) = trace.next() {
        match options.format {
            OutputFormat::Text => println!("{event}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(&event)?),
        }
        seen += 1;
        if options.limit == Some(seen) {
            // Dropping the trace cancels the rest of the computation.
            return Ok(None);
        }
    }
    Ok(Some(trace.finish()))
}

fn print_result<T: Serialize + Display>(result: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{result}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
    }
    Ok(())
}

fn print_product(product: &num_bigint::BigUint, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("product: {product}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "product": product.to_str_radix(10) })
        ),
    }
    Ok(())
}
