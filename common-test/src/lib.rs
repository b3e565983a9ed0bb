use std::{
    cell::RefCell,
    error::Error,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use tempfile::TempDir;

/// In-memory writer whose content stays readable after being handed to an observer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer failing on every call.
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

/// Temporary directory holding the log files of a single test.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(LogDir {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Path below a directory that does not exist, so it can never be opened.
    pub fn unreachable_file(&self, name: &str) -> PathBuf {
        self.dir.path().join("missing").join(name)
    }

    /// Content of `name`, or `None` when the file was never created.
    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.file(name)).ok()
    }
}
