// src/output.rs
// =============================================================================
// Writes the rendered Markdown to disk.
//
// The text goes to a temporary file in the destination's directory first and
// is then renamed over the destination. A failed run never leaves a
// half-written outline behind, and an existing file is replaced whole.
// =============================================================================

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create a temporary file next to {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write Markdown for {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// Saves `text` at `path`, overwriting whatever is there
pub fn save_as_md(text: &str, path: &Path) -> Result<(), WriteError> {
    let owned = || path.to_path_buf();

    // "linktree.md" has an empty parent, which means the current directory
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|source| WriteError::Create {
        path: owned(),
        source,
    })?;

    fill(&mut file, text).map_err(|source| WriteError::Write {
        path: owned(),
        source,
    })?;

    file.persist(path).map_err(|e| WriteError::Persist {
        path: owned(),
        source: e.error,
    })?;

    info!(path = %path.display(), bytes = text.len(), "wrote link tree");
    Ok(())
}

fn fill(file: &mut NamedTempFile, text: &str) -> io::Result<()> {
    file.write_all(text.as_bytes())?;
    file.flush()?;
    make_readable(file)
}

// Temporary files are created owner-only; give the outline the usual mode
#[cfg(unix)]
fn make_readable(file: &NamedTempFile) -> io::Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    file.as_file().set_permissions(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn make_readable(_file: &NamedTempFile) -> io::Result<()> {
    Ok(())
}
