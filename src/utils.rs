use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the entire file at `path` into memory.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<u8>, IoError> {
    let path = path.as_ref();

    let data = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!("read {} bytes from '{}'", data.len(), path.display());

    Ok(data)
}

/// Writes `data` to `path`.
///
/// The data is written to a temporary file next to `path` first, `path`
/// is only replaced once everything has been written.
pub fn write_output(path: impl AsRef<Path>, data: &[u8]) -> Result<(), IoError> {
    let path = path.as_ref();
    let err = |source| IoError::Write {
        path: path.to_owned(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(err)?;
    tmp.write_all(data).map_err(err)?;
    tmp.persist(path).map_err(|e| err(e.error))?;
    tracing::debug!("wrote {} bytes to '{}'", data.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");

        write_output(&path, b"ABCABC").unwrap();

        assert_eq!(read_input(&path).unwrap(), b"ABCABC");
    }

    #[test]
    fn write_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"previous content").unwrap();

        write_output(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let err = read_input(&path).unwrap_err();

        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.bin");

        let err = write_output(&path, b"data").unwrap_err();

        assert!(matches!(err, IoError::Write { .. }));
        assert!(!path.exists());
    }
}
