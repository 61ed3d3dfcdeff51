use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use merlin6502::listing::to_hex;
use merlin6502::parser::NumberParser;
use merlin6502::{AsmOptions, Assembler6502, DEFAULT_ORIGIN};

#[derive(Debug, Parser)]
#[command(author, version, about = "Two-pass assembler for Merlin-style 6502 source")]
struct Args {
    /// Source file
    input: PathBuf,

    /// Binary output, defaults to the input with a `.bin` extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log the listing and per-line detail
    #[arg(short, long)]
    verbose: bool,

    /// Start address before any ORG (`$C000`, `%...` or decimal)
    #[arg(long, value_parser = parse_origin, default_value_t = DEFAULT_ORIGIN)]
    origin: u16,

    /// Write the listing to this file
    #[arg(long)]
    listing: Option<PathBuf>,

    /// Print the symbol table after assembly
    #[arg(long)]
    symbols: bool,
}

fn parse_origin(s: &str) -> Result<u16, String> {
    let value = NumberParser::parse(s)?;
    u16::try_from(value).map_err(|_| format!("origin {} does not fit in 16 bits", s))
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<bool> {
    let src = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let assembler = Assembler6502::with_options(AsmOptions {
        verbose: args.verbose,
        origin: args.origin,
    });
    let out = assembler.assemble(&src);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("bin"));
    fs::write(&output, &out.binary)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "{} bytes at ${} written to {}",
        out.binary.len(),
        to_hex(out.origin as u32, Some(4)),
        output.display()
    );

    if let Some(path) = &args.listing {
        out.save_listing(path)
            .with_context(|| format!("failed to write listing {}", path.display()))?;
        info!("listing saved to {}", path.display());
    }

    if args.symbols {
        for (name, value) in out.symbols.iter() {
            println!("{:<16} ${}", name, to_hex(value as u32, None));
        }
    }

    if !out.is_clean() {
        error!("{} line(s) failed to assemble", out.diagnostics.len());
    }
    Ok(out.is_clean())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
