use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{fs, io};

use tempfile::TempDir;

/// Collects a puzzle's files in a temp dir, then moves the whole folder into
/// place so a partially written puzzle never lands in the output directory.
pub(crate) struct PuzzleFolderBuilder {
    temp_dir: TempDir,
}

impl PuzzleFolderBuilder {
    pub fn new() -> io::Result<Self> {
        let s = Self {
            temp_dir: tempfile::tempdir()?,
        };
        Ok(s)
    }

    pub fn save<P: AsRef<Path>>(self, path: P) -> io::Result<()> {
        fs::rename(&self.temp_dir, path)
    }

    pub fn write_puzzle(&self, contents: &str) -> io::Result<()> {
        self.write_file("puzzle", contents)
    }

    pub fn write_solution(&self, contents: &str) -> io::Result<()> {
        self.write_file("solution", contents)
    }

    fn write_file(&self, name: &str, contents: &str) -> io::Result<()> {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}
