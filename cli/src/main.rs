use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minegen_core::{Minefield, Placement, render};

use prompt::Prompter;

mod prompt;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random minefield and print it", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How mines are distributed over the field
    #[arg(short, long, value_enum, default_value_t = PlacementArg::Rejection)]
    placement: PlacementArg,

    /// How the generated field is printed
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlacementArg {
    /// Retry random positions until they are free
    Rejection,
    /// Shuffle positions, bounded at any density
    Shuffle,
}

impl From<PlacementArg> for Placement {
    fn from(other: PlacementArg) -> Self {
        match other {
            PlacementArg::Rejection => Placement::Rejection,
            PlacementArg::Shuffle => Placement::Shuffle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per row, `.` empty, `M` mine, digits for counts
    Text,
    /// The whole field as a JSON document
    Json,
}

fn write_field<W: Write>(out: &mut W, field: &Minefield, format: Format) -> Result<()> {
    match format {
        Format::Text => out.write_all(render(field).as_bytes())?,
        Format::Json => {
            serde_json::to_writer(&mut *out, field).context("Could not serialize the field")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Asks for the field on `input`, then prints prompts and the generated field to `output`.
fn run<R: BufRead, W: Write>(input: R, output: W, args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut prompter = Prompter::new(input, output);
    let config = prompter
        .read_config()
        .context("Could not read the field dimensions")?;
    let (_, mut out) = prompter.into_inner();

    let placement = Placement::from(args.placement);
    log::info!(
        "Generating {}x{} field with {} mines using {:?} placement",
        config.size.0,
        config.size.1,
        config.mines,
        placement
    );
    let field = placement.generate(seed, config);

    write_field(&mut out, &field, args.format)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    run(io::stdin().lock(), io::stdout().lock(), &args)
}
