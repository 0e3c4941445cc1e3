//! Directory layout derived from the executable's location.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{DirectoryRole, Error, Result};
use crate::path::normalize;

/// The three directories the generator works with, all lexically
/// normalized and checked to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory containing the executable.
    pub root: PathBuf,
    /// Base that emitted include paths are relative to.
    pub include: PathBuf,
    /// Directory searched recursively for headers.
    pub scan: PathBuf,
}

/// Parent directory of the invocation path, normalized. A bare program name
/// has an empty parent.
pub fn root_of(invocation: &Path) -> PathBuf {
    normalize(invocation.parent().unwrap_or_else(|| Path::new("")))
}

impl Layout {
    /// Resolve the layout from `argv[0]`.
    pub fn resolve(invocation: &Path, cfg: &Config) -> Result<Self> {
        Self::from_root(root_of(invocation), cfg)
    }

    /// Resolve the layout below an explicit root directory.
    pub fn from_root(root: impl AsRef<Path>, cfg: &Config) -> Result<Self> {
        let root = normalize(root.as_ref());
        ensure_exists(DirectoryRole::Root, &root)?;

        let include = normalize(&root.join(&cfg.include_dir));
        ensure_exists(DirectoryRole::Include, &include)?;

        let scan = normalize(&include.join(&cfg.scan_dir));
        ensure_exists(DirectoryRole::Scan, &scan)?;

        debug!(
            root = %root.display(),
            include = %include.display(),
            scan = %scan.display(),
            "resolved layout"
        );
        Ok(Self {
            root,
            include,
            scan,
        })
    }

    /// Where the umbrella header is written.
    pub fn output_path(&self, cfg: &Config) -> PathBuf {
        self.scan.join(&cfg.output)
    }
}

fn ensure_exists(role: DirectoryRole, path: &Path) -> Result<()> {
    let missing = |source| Error::MissingDirectory {
        role,
        path: path.to_path_buf(),
        source,
    };
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(missing(None)),
        Err(e) => Err(missing(Some(e))),
    }
}
