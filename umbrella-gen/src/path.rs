//! Header path value type and lexical path helpers.
//!
//! [`HeaderPath`] is what ends up between the quotes of an `#include`
//! directive: a relative path made of UTF-8 components, always rendered with
//! forward slashes no matter which separator the host filesystem uses.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically normalize `path`: drop `.` components and collapse `name/..`
/// pairs without touching the filesystem.
///
/// Leading `..` components of a relative path are kept, `..` directly after
/// a root is dropped. A non-empty path that normalizes to nothing becomes
/// `.`; an empty path stays empty.
pub fn normalize(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }

    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}

/// Whether the file name of `path` has exactly the extension `ext` (no dot,
/// case-sensitive). `.h` alone has no extension; `A.h.bak` has `bak`.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension() == Some(OsStr::new(ext))
}

/// A relative path to a header, as written in an `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderPath {
    components: Vec<String>,
}

impl HeaderPath {
    /// Build a path from already-split components. `.` and `name/..` pairs
    /// are normalized away.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for component in components {
            let component = component.into();
            match component.as_str() {
                "" | "." => {}
                ".." if out.last().is_some_and(|last| last != "..") => {
                    out.pop();
                }
                _ => out.push(component),
            }
        }
        Self { components: out }
    }

    /// Parse a path written with `/` separators, e.g. `RE/A/B.h`.
    pub fn from_slash(s: &str) -> Self {
        Self::new(s.split('/'))
    }

    /// Compute `path` relative to `base`, lexically, after normalizing both.
    ///
    /// Fails when the two paths have different roots (one absolute and one
    /// relative, or different drive prefixes), when `base` cannot be walked
    /// back with `..`, or when `path` and `base` are the same location.
    pub fn relative(path: &Path, base: &Path) -> Result<Self> {
        let fail = || Error::RelativePath {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        };

        let path_norm = normalize(path);
        let base_norm = normalize(base);
        if path_norm.is_absolute() != base_norm.is_absolute() {
            return Err(fail());
        }

        let mut path_iter = path_norm.components().peekable();
        let mut base_iter = base_norm.components().peekable();
        while let (Some(a), Some(b)) = (path_iter.peek(), base_iter.peek()) {
            if a != b {
                break;
            }
            path_iter.next();
            base_iter.next();
        }

        let mut climb = 0usize;
        for component in base_iter {
            match component {
                Component::Normal(_) => climb += 1,
                Component::CurDir => {}
                _ => return Err(fail()),
            }
        }

        let mut components = vec![String::from(".."); climb];
        for component in path_iter {
            match component {
                Component::Normal(name) => {
                    let name = name
                        .to_str()
                        .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
                    components.push(name.to_owned());
                }
                Component::ParentDir => components.push(String::from("..")),
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) => return Err(fail()),
            }
        }

        if components.is_empty() {
            return Err(fail());
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components; `RE/A/B.h` has a depth of 3.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Extension of the last component without the dot. A name that only
    /// starts with a dot (`.h`) has none.
    ///
    /// Same rule as [`has_extension`], which the collector filters with.
    pub fn extension(&self) -> Option<&str> {
        Path::new(self.file_name()?).extension()?.to_str()
    }

    /// The forward-slash rendering as a byte stream, without allocating.
    pub fn slash_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.components.iter().enumerate().flat_map(|(i, c)| {
            let sep = (i > 0).then_some(b'/');
            sep.into_iter().chain(c.bytes())
        })
    }

    pub fn to_slash_string(&self) -> String {
        self.components.join("/")
    }
}

impl fmt::Display for HeaderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}
