//! File collaborators for the document model
//!
//! Whole-buffer operations only: a load reads the entire file and a save
//! overwrites it in one write. Nothing here is atomic or crash-safe, and
//! parsing itself stays I/O-free (see [`parse_content`](crate::hosts::parsing::parse_content)
//! for callers that already hold the bytes).

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::hosts::document::HostsFile;
use crate::hosts::error::HostsError;

/// The platform default hosts file location.
pub fn system_hosts_path() -> PathBuf {
    #[cfg(windows)]
    {
        let root = std::env::var_os("SystemRoot").unwrap_or_else(|| r"C:\Windows".into());
        Path::new(&root).join(r"System32\drivers\etc\hosts")
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/etc/hosts")
    }
}

/// Load and parse a hosts file, recording its absolute path on the document.
pub fn load_hosts_file(path: impl AsRef<Path>) -> Result<HostsFile, HostsError> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path).map_err(|source| HostsError::Io {
        context: format!("resolving {}", path.display()),
        source,
    })?;
    let content = fs::read_to_string(&absolute).map_err(|source| HostsError::Io {
        context: format!("reading {}", absolute.display()),
        source,
    })?;

    debug!("loaded {} ({} bytes)", absolute.display(), content.len());
    let mut file = HostsFile::parse(&content);
    file.path = Some(absolute);
    Ok(file)
}

impl HostsFile {
    /// Save the rendered document, overwriting the whole file.
    ///
    /// The target is the explicit `path` when given, otherwise the path the
    /// document was loaded from. On success the document's recorded path is
    /// updated to the target.
    pub fn save(&mut self, path: Option<&Path>) -> Result<(), HostsError> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => self
                .path
                .clone()
                .ok_or_else(|| HostsError::Validation("no save path specified".into()))?,
        };

        fs::write(&target, self.to_string()).map_err(|source| HostsError::Io {
            context: format!("writing {}", target.display()),
            source,
        })?;
        self.path = Some(target);
        Ok(())
    }
}
