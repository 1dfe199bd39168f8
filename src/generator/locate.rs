use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory next to the running binary that may hold a bundled generator
pub const RESOURCES_DIR: &str = "resources";

/// Resolve the configured generator to an executable path.
///
/// A value containing a path separator is used as given. A bare name is
/// looked up on `PATH`, then in [`RESOURCES_DIR`] beside the current
/// executable. When nothing is found the name is returned unchanged and the
/// spawn reports the failure.
pub fn locate_generator(configured: &Path) -> PathBuf {
    if configured.components().count() > 1 || configured.is_absolute() {
        return configured.to_path_buf();
    }

    if let Ok(found) = which::which(configured) {
        debug!(path = %found.display(), "found generator on PATH");
        return found;
    }

    if let Some(bundled) = bundled_generator(configured) {
        debug!(path = %bundled.display(), "using bundled generator");
        return bundled;
    }

    configured.to_path_buf()
}

fn bundled_generator(name: &Path) -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?.join(RESOURCES_DIR);

    candidates(name)
        .into_iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.is_file())
}

fn candidates(name: &Path) -> Vec<PathBuf> {
    let mut names = vec![name.to_path_buf()];
    if cfg!(windows) && name.extension().is_none() {
        names.push(name.with_extension("exe"));
        names.push(name.with_extension("cmd"));
    }
    names
}
