use crate::commands::{print_json, write_list, Context};
use crate::input::InputSource;
use anyhow::Result;
use clap::Args;
use dialsift_core::SampleOutputDto;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Numbers to draw from (`-` for stdin)
    pub input: PathBuf,
    /// How many numbers to pick
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: i64,
    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
    /// Also write the picked numbers to this file, one per line
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn sample(ctx: &Context<'_>, args: SampleArgs) -> Result<()> {
    let rules = &ctx.config.sample;
    let source = InputSource::from_arg(&args.input);
    let population = rules.normalize(&source.read()?);
    debug!(
        source = %source.label(),
        available = population.len(),
        "sample population built"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let numbers = dialsift_core::sample(&population, args.count, &mut rng)?;

    if let Some(path) = args.out.as_deref() {
        write_list(path, &numbers)?;
        debug!(path = %path.display(), "sample written");
    }

    let output = SampleOutputDto {
        available: population.len(),
        requested: numbers.len(),
        numbers,
    };

    if ctx.json {
        return print_json(&output);
    }

    println!("picked {} of {} numbers", output.requested, output.available);
    for number in &output.numbers {
        println!("{number}");
    }
    if let Some(path) = args.out {
        println!("sample written to {}", path.display());
    }
    Ok(())
}
