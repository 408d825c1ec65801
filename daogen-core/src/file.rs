use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Generated DAOs are always overwritten.
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        write_file(&self.path, &self.content).map_err(|source| {
            Box::new(Error::Write {
                path: self.path.clone(),
                source,
            })
        })?;

        Ok(if existed {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        })
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Users.ts");

        let result = File::new(&path, "export {}").write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {}");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output").join("dao").join("Users.ts");

        File::new(&path, "nested").write().unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Users.ts");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_error_names_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("output");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("Users.ts");

        let err = File::new(&path, "content").write().unwrap_err();

        assert!(matches!(*err, Error::Write { path: ref p, .. } if *p == path));
        assert_eq!(err.stage(), crate::Stage::Write);
    }
}
