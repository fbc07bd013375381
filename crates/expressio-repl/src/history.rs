//! Session transcript

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Every input line and rendered result of the session, in order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Multi-line renderings stay a single entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write the transcript to `path`, one entry per line, replacing any
    /// existing file.
    pub fn export(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        for entry in &self.entries {
            writeln!(writer, "{}", entry)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("exported {} history entries to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("expressio-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_export_writes_one_line_per_entry() {
        let mut history = History::new();
        history.push("1 + 1");
        history.push(">> 2.00000");

        let path = scratch("history.txt");
        history.export(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "1 + 1\n>> 2.00000\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let mut history = History::new();
        history.push("x");

        let path = scratch("no-such-dir").join("history.txt");
        assert!(history.export(&path).is_err());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push("a");
        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }
}
