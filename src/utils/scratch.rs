use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Scoped scratch copy of an uploaded document. The scan client consumes a
/// file path, so each in-memory upload is spooled to disk for the duration
/// of one verification call. Removal on every exit path is guaranteed by
/// the `NamedTempFile` drop; a failing item must not leak its scratch file.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    pub fn spool(bytes: &[u8]) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spools_bytes_and_removes_on_drop() {
        let path = {
            let scratch = ScratchFile::spool(b"fake image bytes").unwrap();
            let on_disk = std::fs::read(scratch.path()).unwrap();
            assert_eq!(on_disk, b"fake image bytes");
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn removes_file_even_when_caller_errors_out() {
        let path = {
            let scratch = ScratchFile::spool(b"doc").unwrap();
            let path = scratch.path().to_path_buf();
            let result: std::result::Result<(), &str> = Err("verification failed");
            assert!(result.is_err());
            path
        };
        assert!(!path.exists());
    }
}
