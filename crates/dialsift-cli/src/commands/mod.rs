use anyhow::{Context as _, Result};
use dialsift_config::AppConfig;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod compare;
pub mod completions;
pub mod sample;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// One number per line, newline-terminated.
pub fn write_list(path: &Path, numbers: &[String]) -> Result<()> {
    let mut contents = numbers.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).with_context(|| format!("write output file {}", path.display()))
}
