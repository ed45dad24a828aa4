use anyhow::Result;
use clap::Parser;
use steptrace_cli::cli::{run, Args};

fn main() -> Result<()> {
    run(Args::parse())
}
