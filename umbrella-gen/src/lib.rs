//! umbrella-gen — umbrella header generator.
//!
//! Walks a header tree and writes one header that `#include`s every other
//! header in it, in a deterministic order, leaving itself out.
//!
//! The stock layout is relative to the executable:
//!
//! ```text
//! <exe dir>/
//!   umbrella-gen            the executable
//!   umbrella-gen.toml       optional, see [`config::Config`]
//!   include/                include root, emitted paths are relative to it
//!     RE/                   scanned recursively for `*.h`
//!       Skyrim.h            generated
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Same as running the binary installed at /opt/sdk/umbrella-gen.
//! let written = umbrella_gen::run(Path::new("/opt/sdk/umbrella-gen")).unwrap();
//! println!("{}", written.display());
//! ```
//!
//! Or build the header in memory from an explicit layout:
//!
//! ```no_run
//! use umbrella_gen::{config::Config, layout::Layout};
//!
//! let cfg = Config::default();
//! let layout = Layout::from_root("/opt/sdk", &cfg).unwrap();
//! let header = umbrella_gen::generate(&layout, &cfg).unwrap();
//! print!("{}", header.render());
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub mod collect;
pub mod config;
pub mod emit;
pub mod error;
pub mod layout;
pub mod path;
pub mod sort;

pub use error::{Error, Result};

use crate::config::Config;
use crate::emit::UmbrellaHeader;
use crate::layout::Layout;
use crate::path::HeaderPath;

/// Run the full pipeline for the program invoked as `invocation` (its
/// `argv[0]`): load `umbrella-gen.toml` from the executable's directory if
/// present, then [`run_with_config`].
///
/// Returns the path the umbrella header was written to.
pub fn run(invocation: &Path) -> Result<PathBuf> {
    let config_path = layout::root_of(invocation).join(config::CONFIG_FILE_NAME);
    let cfg = config::load_or_default(&config_path)?;
    run_with_config(invocation, &cfg)
}

/// Resolve the layout, collect headers, open the output, sort and filter,
/// then write the umbrella header.
///
/// The output file is created before sorting, so an unwritable location
/// fails after the tree has been scanned but before anything is rendered.
pub fn run_with_config(invocation: &Path, cfg: &Config) -> Result<PathBuf> {
    let layout = Layout::resolve(invocation, cfg)?;
    let headers = collect::collect_headers(&layout, &cfg.extension)?;

    let output_path = layout.output_path(cfg);
    let file = emit::create_output(&output_path)?;

    let header = assemble(&layout, cfg, headers)?;
    emit::write_output(file, &output_path, &header)?;

    info!(
        path = %output_path.display(),
        includes = header.includes().len(),
        sort = ?cfg.sort,
        "wrote umbrella header"
    );
    Ok(output_path)
}

/// Collect, sort and filter headers below `layout` without writing anything.
pub fn generate(layout: &Layout, cfg: &Config) -> Result<UmbrellaHeader> {
    let headers = collect::collect_headers(layout, &cfg.extension)?;
    assemble(layout, cfg, headers)
}

fn assemble(layout: &Layout, cfg: &Config, mut headers: Vec<HeaderPath>) -> Result<UmbrellaHeader> {
    cfg.sort.sort(&mut headers);

    let own = HeaderPath::relative(&layout.output_path(cfg), &layout.include)?;
    if cfg.sort.remove(&mut headers, &own) {
        debug!(header = %own, "left umbrella header out of its own include list");
    }

    Ok(UmbrellaHeader::new(cfg.guard.as_str(), headers))
}
