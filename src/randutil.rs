//! Kernel-provided random UUIDs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Default location of the kernel's per-read random UUID.
pub const KERNEL_UUID_PATH: &str = "/proc/sys/kernel/random/uuid";

/// Failure reading a kernel UUID.
#[derive(Debug, thiserror::Error)]
pub enum KernelUuidError {
    /// The UUID file could not be read.
    #[error("cannot read kernel UUID from {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// The file did not hold a UUID.
    #[error("malformed kernel UUID {content:?} in {path}")]
    Malformed {
        /// File that was read.
        path: PathBuf,
        /// Trimmed file content.
        content: String,
    },
}

/// Reader for the kernel UUID file at a configurable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelUuidSource {
    path: PathBuf,
}

impl Default for KernelUuidSource {
    fn default() -> Self {
        Self::with_path(KERNEL_UUID_PATH)
    }
}

impl KernelUuidSource {
    /// Creates a source reading from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads one UUID in `8-4-4-4-12` hex form, trimming surrounding whitespace.
    pub fn read(&self) -> Result<String, KernelUuidError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            debug!(path = %self.path.display(), %source, "kernel UUID read failed");
            KernelUuidError::Read {
                path: self.path.clone(),
                source,
            }
        })?;

        let content = raw.trim();
        if !is_uuid(content) {
            return Err(KernelUuidError::Malformed {
                path: self.path.clone(),
                content: content.to_string(),
            });
        }
        Ok(content.to_string())
    }
}

/// Reads a UUID from [`KERNEL_UUID_PATH`].
pub fn random_kernel_uuid() -> Result<String, KernelUuidError> {
    KernelUuidSource::default().read()
}

fn is_uuid(text: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let mut parts = text.split('-');
    let lengths_match = GROUPS.iter().all(|&len| {
        parts
            .next()
            .is_some_and(|part| part.len() == len && part.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    lengths_match && parts.next().is_none()
}
