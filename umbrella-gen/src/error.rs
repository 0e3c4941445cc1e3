//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

/// Which directory of the [`Layout`](crate::layout::Layout) failed its
/// existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    Root,
    Include,
    Scan,
}

impl std::fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DirectoryRole::Root => "current",
            DirectoryRole::Include => "include",
            DirectoryRole::Scan => "scan",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not enough arguments were passed to evaluate the current path")]
    MissingInvocation,

    #[error("{role} path does not exist: {}", .path.display())]
    MissingDirectory {
        role: DirectoryRole,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("cannot build a path for {} relative to {}", .path.display(), .base.display())]
    RelativePath { path: PathBuf, base: PathBuf },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("failed to walk header tree")]
    Walk(#[from] walkdir::Error),

    #[error("failed to open output file {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
