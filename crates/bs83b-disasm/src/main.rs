use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use bs83b_rs::disasm::disassemble;
use bs83b_rs::rom::load_rom;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Holtek BS83B08A-3 binary code disassembler",
    long_about = None
)]
struct Cli {
    /// The binary file to disassemble
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Do not resolve jump/call targets into labels
    #[arg(long)]
    no_labels: bool,
    /// Write the listing to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let words = load_rom(&cli.input)
        .with_context(|| format!("cannot load {}", cli.input.display()))?;

    let listing = disassemble(&words, !cli.no_labels);

    match cli.out {
        Some(path) => std::fs::write(&path, listing)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{listing}"),
    }

    Ok(())
}
