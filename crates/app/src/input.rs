//! Input loading.
//!
//! The source is read in full. A source that is missing or cannot be read
//! counts as empty input: the run still produces an (empty) code table.

use log::{debug, warn};
use std::path::Path;

/// Read the whole of `path`, or an empty buffer if it cannot be read.
pub fn read_source(path: &Path) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => {
            debug!("read {} bytes from {}", bytes.len(), path.display());
            bytes
        }
        Err(err) => {
            warn!("cannot read {} ({}); using empty input", path.display(), err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let name = format!("huffcode-input-{}-missing", std::process::id());
        let path = std::env::temp_dir().join(name);
        assert!(read_source(&path).is_empty());
    }

    #[test]
    fn test_directory_is_empty() {
        assert!(read_source(&std::env::temp_dir()).is_empty());
    }

    #[test]
    fn test_reads_whole_file() {
        let path = std::env::temp_dir().join(format!("huffcode-input-{}-data", std::process::id()));
        let data: Vec<u8> = (0..=255).cycle().take(10_000).collect();
        std::fs::write(&path, &data).unwrap();

        assert_eq!(read_source(&path), data);

        std::fs::remove_file(&path).unwrap();
    }
}
