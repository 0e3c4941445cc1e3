//! Umbrella header rendering and output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::path::HeaderPath;

/// Content of the generated file: a guard line, a blank line, then one
/// `#include` per entry in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmbrellaHeader {
    guard: String,
    includes: Vec<HeaderPath>,
}

impl UmbrellaHeader {
    pub fn new(guard: impl Into<String>, includes: Vec<HeaderPath>) -> Self {
        Self {
            guard: guard.into(),
            includes,
        }
    }

    pub fn includes(&self) -> &[HeaderPath] {
        &self.includes
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.guard.len() + 2 + self.includes.len() * 48);
        out.push_str(&self.guard);
        out.push_str("\n\n");
        for include in &self.includes {
            out.push_str("#include \"");
            out.push_str(&include.to_slash_string());
            out.push_str("\"\n");
        }
        out
    }
}

/// Create or truncate the output file.
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `header` into a file opened with [`create_output`]. A failed write
/// removes the partial file.
pub fn write_output(file: File, path: &Path, header: &UmbrellaHeader) -> Result<()> {
    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(header.render().as_bytes())
        .and_then(|()| writer.flush());

    if let Err(source) = written {
        drop(writer);
        if let Err(e) = std::fs::remove_file(path) {
            warn!(path = %path.display(), err = %e, "failed to remove partial output");
        }
        return Err(Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
