use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Default manifest file name, looked up in the working directory.
pub const DEFAULT_FILE_NAME: &str = "daogen.toml";

/// A daogen.toml file and its parsed manifest.
pub struct DaogenToml {
    path: PathBuf,
    manifest: Manifest,
}

impl DaogenToml {
    /// Open and parse a daogen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Open `daogen.toml` in `dir` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(DEFAULT_FILE_NAME);
        if path.is_file() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a path from the manifest against the directory it lives in.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match self.path.parent() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_relative_paths() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_FILE_NAME),
            "[generator]\ntemplate = \"templates/dao.template.txt\"\n",
        )
        .unwrap();

        let toml = DaogenToml::discover(temp.path()).unwrap().unwrap();
        let template = toml.manifest().generator.template.clone().unwrap();
        assert_eq!(
            toml.resolve(&template),
            temp.path().join("templates/dao.template.txt")
        );

        let absolute = temp.path().join("elsewhere.txt");
        assert_eq!(toml.resolve(&absolute), absolute);
    }

    #[test]
    fn test_discover_missing_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(DaogenToml::discover(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_existing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_FILE_NAME),
            "[types]\ndatetime = \"string\"\n",
        )
        .unwrap();

        let file = DaogenToml::discover(temp.path()).unwrap().unwrap();
        assert_eq!(
            file.manifest().types.get("datetime").map(String::as_str),
            Some("string")
        );
        assert_eq!(file.path(), temp.path().join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_discover_invalid_is_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(DEFAULT_FILE_NAME), "[types\n").unwrap();
        assert!(DaogenToml::discover(temp.path()).is_err());
    }
}
