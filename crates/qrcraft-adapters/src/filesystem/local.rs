//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use qrcraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{QrCraftError, QrCraftResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> QrCraftResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> QrCraftResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> QrCraftError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_into_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let file = nested.join("qrcode.png");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, &[0x89, 0x50]).unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read(&file).unwrap(), vec![0x89, 0x50]);
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing/qrcode.svg");

        let err = LocalFilesystem.write_file(&file, b"<svg/>").unwrap_err();
        assert!(matches!(
            err,
            QrCraftError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
