use crate::commands::{print_json, write_list, Context};
use crate::input::{ensure_single_stdin, InputSource};
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use dialsift_core::{ComparisonOutputDto, Normalizer, NumberKind, Reconstruct, SplitMode};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Numbers that were sent to (`-` for stdin)
    pub sender: PathBuf,
    /// Numbers that responded (`-` for stdin)
    pub response: PathBuf,
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
    #[arg(long, value_enum)]
    pub split: Option<SplitArg>,
    /// Digits kept per number
    #[arg(long)]
    pub length: Option<usize>,
    /// Dialing prefix restored on phone targets
    #[arg(long)]
    pub prefix: Option<String>,
    /// Also write the targets to this file, one per line
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Phone,
    Payment,
}

impl From<KindArg> for NumberKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Phone => NumberKind::Phone,
            KindArg::Payment => NumberKind::Payment,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SplitArg {
    Lines,
    Whitespace,
}

impl From<SplitArg> for SplitMode {
    fn from(split: SplitArg) -> Self {
        match split {
            SplitArg::Lines => SplitMode::Lines,
            SplitArg::Whitespace => SplitMode::Whitespace,
        }
    }
}

pub fn compare(ctx: &Context<'_>, args: CompareArgs) -> Result<()> {
    let defaults = &ctx.config.compare;
    let kind = args.kind.map(NumberKind::from).unwrap_or(defaults.kind);
    let split = args.split.map(SplitMode::from).unwrap_or(defaults.split);
    let length = args.length.unwrap_or(defaults.token_length);
    let prefix = args.prefix.as_deref().unwrap_or(&defaults.phone_prefix);

    let normalizer = Normalizer::new(kind, split, length)?;
    let reconstruct = Reconstruct::for_kind(kind, prefix.trim())?;

    let sender_source = InputSource::from_arg(&args.sender);
    let response_source = InputSource::from_arg(&args.response);
    ensure_single_stdin(&[&sender_source, &response_source])?;

    let sender = normalizer
        .normalize(&sender_source.read()?)
        .with_context(|| format!("sender numbers ({})", sender_source.label()))?;
    let response = normalizer
        .normalize(&response_source.read()?)
        .with_context(|| format!("response numbers ({})", response_source.label()))?;
    debug!(
        kind = %kind,
        length,
        sender = sender.len(),
        response = response.len(),
        "inputs normalized"
    );

    let comparison = dialsift_core::compare(&sender, &response, &reconstruct);
    let output = ComparisonOutputDto::from_comparison(kind, comparison);
    debug!(
        duplicates = output.summary.duplicates,
        targets = output.summary.targets,
        "comparison complete"
    );

    if let Some(path) = args.out.as_deref() {
        write_list(path, &output.targets)?;
        debug!(path = %path.display(), "targets written");
    }

    if ctx.json {
        return print_json(&output);
    }

    print_human(&output);
    if let Some(path) = args.out {
        println!("targets written to {}", path.display());
    }
    Ok(())
}

fn print_human(output: &ComparisonOutputDto) {
    println!("{}", output.summary);
    if output.duplicates.is_empty() {
        println!("duplicates: none");
    } else {
        println!("duplicates: {}", output.duplicates.join(", "));
    }
    if output.targets.is_empty() {
        println!("targets: none");
        return;
    }
    println!("targets:");
    for target in &output.targets {
        println!("{target}");
    }
}
