// src/content/loader.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::utils::error::ContentError;

/// Reads text documents relative to a fixed base directory.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    base_dir: PathBuf,
}

impl ContentLoader {
    /// Creates a new ContentLoader rooted at the specified base directory.
    /// The directory is not checked here; a missing one surfaces as
    /// `NotFound` on the first read.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Reads `relative_path` (resolved against the base directory) as UTF-8.
    pub async fn read_file(&self, relative_path: &str) -> Result<String, ContentError> {
        let file_path = self.base_dir.join(relative_path);
        let display = file_path.display().to_string();

        // tokio::fs::read opens, reads and closes the handle on every path.
        let bytes = tokio::fs::read(&file_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentError::NotFound(display.clone()),
            _ => ContentError::Io {
                path: display.clone(),
                source: e,
            },
        })?;

        let text = String::from_utf8(bytes).map_err(|source| ContentError::Decode {
            path: display.clone(),
            source,
        })?;

        let shown = &display;
        tracing::debug!("Read {} ({} bytes)", shown, text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_reads_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("examples/wallet")).unwrap();
        fs::write(dir.path().join("examples/wallet/create.py"), "print('hi')\n").unwrap();

        let loader = ContentLoader::new(dir.path());
        let text = loader.read_file("examples/wallet/create.py").await.unwrap();
        assert_eq!(text, "print('hi')\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ContentLoader::new(dir.path());

        let err = loader.read_file("README.md").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let loader = ContentLoader::new(dir.path());
        let err = loader.read_file("bad.txt").await.unwrap_err();
        assert!(matches!(err, ContentError::Decode { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let loader = ContentLoader::new(dir.path());
        let result = loader.read_file("sub").await;
        assert!(matches!(result, Err(ContentError::Io { .. })), "got {:?}", result);
    }
}
