use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to open file: {}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to write file: {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Appends `line` and a terminator to the file at `path`, creating it if needed.
///
/// The file is opened and closed within the call.
pub fn append_line(path: &Path, line: &str) -> Result<(), SinkError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    writeln!(file, "{line}")
        .and_then(|_| file.flush())
        .map_err(|source| SinkError::Write {
            path: path.to_path_buf(),
            source,
        })
}
