//! Destination of the generated document

use std::fs;
use std::io;
use std::path::Path;

/// Receives the finished document.
///
/// Implementations write the whole text at once; there is no partial-write
/// recovery, re-running the generator is the recovery path.
pub trait OutputSink {
    fn write_document(&mut self, destination: &Path, text: &str) -> io::Result<()>;
}

/// Writes to the filesystem, creating or truncating the destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write_document(&mut self, destination: &Path, text: &str) -> io::Result<()> {
        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(destination, text)
    }
}
