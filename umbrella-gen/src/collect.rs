//! Header discovery.

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::Result;
use crate::layout::Layout;
use crate::path::{HeaderPath, has_extension};

/// Recursively collect every regular file under `layout.scan` whose
/// extension is exactly `extension`, as paths relative to `layout.include`.
///
/// Symlinks are not followed and are skipped along with directories and
/// other files. The result is in traversal order, which is not stable
/// across platforms; sort it before emitting.
pub fn collect_headers(layout: &Layout, extension: &str) -> Result<Vec<HeaderPath>> {
    let mut headers = Vec::new();

    for entry in WalkDir::new(&layout.scan).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, extension) {
            continue;
        }
        let header = HeaderPath::relative(path, &layout.include)?;
        trace!(header = %header, "found header");
        headers.push(header);
    }

    debug!(
        scan = %layout.scan.display(),
        headers = headers.len(),
        "collected headers"
    );
    Ok(headers)
}
