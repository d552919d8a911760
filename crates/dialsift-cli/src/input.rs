use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .with_context(|| "read stdin")?;
                Ok(buf)
            }
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("read input file {}", path.display())),
        }
    }
}

/// Stdin can only be consumed once per run.
pub fn ensure_single_stdin(sources: &[&InputSource]) -> Result<()> {
    let count = sources
        .iter()
        .filter(|source| matches!(source, InputSource::Stdin))
        .count();
    if count > 1 {
        return Err(invalid_input("only one input may be read from stdin (-)"));
    }
    Ok(())
}
