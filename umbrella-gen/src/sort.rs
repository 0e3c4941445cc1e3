//! Ordering of collected header paths.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::path::HeaderPath;

/// Comparison policy for the include list.
///
/// One policy is chosen per run and used both to sort the list and to
/// search it when removing the umbrella header's own entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Byte-wise, case-sensitive comparison of the forward-slash rendering.
    /// `RE/Bar/Baz.h` < `RE/Foo.h` < `RE/bar/Qux.h`.
    #[default]
    Lexicographic,
    /// Shallower paths first, then component by component from the root,
    /// ignoring case. `RE/Foo.h` < `RE/Bar/Baz.h`.
    DepthFirst,
}

impl SortPolicy {
    pub fn compare(self, a: &HeaderPath, b: &HeaderPath) -> Ordering {
        match self {
            SortPolicy::Lexicographic => a.slash_bytes().cmp(b.slash_bytes()),
            SortPolicy::DepthFirst => a.depth().cmp(&b.depth()).then_with(|| {
                a.components()
                    .iter()
                    .zip(b.components())
                    .map(|(x, y)| caseless_cmp(x, y))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }

    /// Stable sort; entries that compare equal keep their relative order.
    pub fn sort(self, paths: &mut [HeaderPath]) {
        paths.sort_by(|a, b| self.compare(a, b));
    }

    /// Remove `needle` from `paths`, which must already be sorted with this
    /// policy. Returns whether an entry was removed.
    ///
    /// Binary search narrows to the run of entries comparing equal to
    /// `needle`; only an exact match inside that run is removed, so paths
    /// differing in case alone survive under [`SortPolicy::DepthFirst`].
    pub fn remove(self, paths: &mut Vec<HeaderPath>, needle: &HeaderPath) -> bool {
        let start = paths.partition_point(|p| self.compare(p, needle).is_lt());
        let len = paths[start..].partition_point(|p| self.compare(p, needle).is_eq());
        match paths[start..start + len].iter().position(|p| p == needle) {
            Some(offset) => {
                paths.remove(start + offset);
                true
            }
            None => false,
        }
    }
}

/// Compare two strings by their Unicode lowercase mapping, character by
/// character. Independent of locale and platform.
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
