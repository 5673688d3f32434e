use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A throwaway directory of configuration files on the real filesystem.
///
/// Configuration text may use `{root}` as a placeholder for the directory's
/// absolute path, since include paths are resolved against the working
/// directory rather than the including file.
pub struct ConfigTree {
    dir: TempDir,
}

impl ConfigTree {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `rel` (creating parent directories) and return its full path.
    pub fn file(&self, rel: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let root = self.dir.path().display().to_string();
        fs::write(&path, contents.replace("{root}", &root))?;
        Ok(path)
    }
}
