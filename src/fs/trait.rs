//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string contents to a file, replacing anything already there
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
