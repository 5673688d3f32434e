// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface used by the loader.
pub trait FileSystem: Debug {
    /// Read a whole file as raw bytes.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Return the entries of a directory as full paths, in whatever order the
    /// underlying filesystem yields them.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("reading file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}

/// True for the `.` and `..` pseudo entries some directory listings include.
pub fn is_special_entry(path: &Path) -> bool {
    let raw = path.as_os_str().to_string_lossy();
    let name = raw.rsplit(std::path::is_separator).next().unwrap_or_default();
    name == "." || name == ".."
}
