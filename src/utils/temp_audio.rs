use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

/// Uploaded audio materialized as a uniquely named file under the system
/// temp directory. The file lives exactly as long as the guard: dropping it
/// removes the file, on success and error paths alike.
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub fn create(data: &[u8]) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("voice-{}.wav", Uuid::new_v4()));
        std::fs::write(&path, data)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed temp audio file: {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove temp audio file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_given_bytes() {
        let file = TempAudioFile::create(b"RIFF....").unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"RIFF....");
    }

    #[test]
    fn generates_unique_paths() {
        let a = TempAudioFile::create(b"a").unwrap();
        let b = TempAudioFile::create(b"b").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn removes_the_file_on_drop() {
        let path = {
            let file = TempAudioFile::create(b"RIFF....").unwrap();
            assert!(file.path().exists());
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_an_already_removed_file() {
        let file = TempAudioFile::create(b"RIFF....").unwrap();
        std::fs::remove_file(file.path()).unwrap();
        // Dropping must not panic even though the file is gone.
    }
}
