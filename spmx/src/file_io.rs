//! Reading and writing matrix files
//!
//! Each call opens its file, reads or writes it completely and closes it
//! before returning.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use spmx_core::SparseMatrix;

use crate::{Error, OutputFormat, Result};

/// Handle to a matrix file on disk
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub path: PathBuf,
}

impl MatrixFile {
    /// Open an existing matrix file
    ///
    /// Fails with [`Error::NotFound`] when `path` is not a regular file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::debug!("missing operand file {}", path.display());
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Handle for a file that will be (over)written
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole file
    pub fn read(&self) -> Result<SparseMatrix> {
        log::info!("Loading matrix from file: {}", self.path.display());
        let text = std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;

        let matrix = SparseMatrix::parse(&text).map_err(|source| Error::Load {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "{}: {}x{} with {} nonzero entries",
            self.path.display(),
            matrix.rows(),
            matrix.cols(),
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// Write `matrix` in the given format, replacing any existing content
    pub fn write(&self, matrix: &SparseMatrix, format: OutputFormat) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        match format {
            OutputFormat::Text => write!(writer, "{matrix}").map_err(|e| Error::io(&self.path, e))?,
            OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, matrix).map_err(|e| {
                if e.is_io() {
                    Error::io(&self.path, e.into())
                } else {
                    Error::Json(e)
                }
            })?,
        }
        writer.flush().map_err(|e| Error::io(&self.path, e))
    }

    /// Open and read `path` in one step
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
        Self::open(path)?.read()
    }

    /// Create `path` and write `matrix` to it in one step
    pub fn save<P: AsRef<Path>>(path: P, matrix: &SparseMatrix, format: OutputFormat) -> Result<()> {
        Self::create(path).write(matrix, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmx_core::SpmxError;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "m.txt", "rows=2\ncols=2\n(0, 0, 5)\n\n(1, 1, -3)\n");

        let m = MatrixFile::load(&path).unwrap();
        assert_eq!(m.get_element(0, 0), 5);
        assert_eq!(m.get_element(1, 1), -3);
        assert_eq!(m.get_element(0, 1), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(MatrixFile::load(&path), Err(Error::NotFound(p)) if p == path));

        // Directories are not matrix files
        assert!(matches!(MatrixFile::open(dir.path()), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.txt", "rows=2\ncols=2\n(0,0,1)\n1,2,3\n");

        match MatrixFile::load(&path) {
            Err(Error::Load { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(
                    source,
                    SpmxError::MalformedEntry {
                        line: 4,
                        text: "1,2,3".to_string()
                    }
                );
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let m = SparseMatrix::from_entries(3, 3, [(2, 2, 1), (0, 1, -4)]);

        MatrixFile::save(&path, &m, OutputFormat::Text).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "rows=3\ncols=3\n(0, 1, -4)\n(2, 2, 1)");
        assert_eq!(MatrixFile::load(&path).unwrap(), m);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_save_json_io_failure_is_io_error() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        // Large enough to overflow the write buffer mid-serialization
        let m = SparseMatrix::from_entries(1, 2_000, (0..2_000).map(|c| (0, c, 1)));

        match MatrixFile::save(full, &m, OutputFormat::Json) {
            Err(Error::Io { path, .. }) => assert_eq!(path, full),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let m = SparseMatrix::from_entries(1, 2, [(0, 1, 9)]);

        MatrixFile::save(&path, &m, OutputFormat::Json).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: SparseMatrix = serde_json::from_str(&text).unwrap();
        assert_eq!(back, m);
    }
}
