use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// In-memory output store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputStore {
    // Shared so clones observe writes made through the context.
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_create: bool,
}

impl MemoryOutputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose `create` always fails with `PermissionDenied`.
    pub fn failing() -> Self {
        Self { fail_create: true, ..Self::default() }
    }

    pub fn seed(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.as_bytes().to_vec());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        files.get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl OutputStore for MemoryOutputStore {
    type Writer = MemoryWriter;

    fn create(&self, path: &str) -> Result<MemoryWriter, AppError> {
        if self.fail_create {
            return Err(AppError::output_create(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.files.lock().unwrap().insert(path.to_string(), Vec::new());
        Ok(MemoryWriter { files: Arc::clone(&self.files), path: path.to_string() })
    }
}

/// Handle appending to one file of a `MemoryOutputStore`.
#[derive(Debug)]
pub struct MemoryWriter {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    path: String,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut files = self.files.lock().unwrap();
        files.entry(self.path.clone()).or_default().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
