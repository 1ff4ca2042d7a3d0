//! The reference word list: an unordered, deduplicated set of raw lines.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::scanner::{RawLines, ScanError};

/// Set of accepted words, loaded once and immutable for the rest of the run.
///
/// Entries are raw lines, terminators included. A word list whose final line
/// has no trailing newline therefore stores that entry without one, and it
/// will not match a document line that has one; exact contents are the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashSet<String>,
}

impl Dictionary {
    /// Read the word list at `path` into a set. The file handle is released
    /// when this returns, on success or failure.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a dictionary from any line source. Reads the source to the end;
    /// the first read failure aborts the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ScanError> {
        let mut entries = HashSet::new();
        for line in RawLines::new(reader) {
            entries.insert(line?);
        }
        Ok(Self { entries })
    }

    /// Exact-contents membership test, terminator included.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_entries_keep_terminators() {
        let dict = Dictionary::from_reader(Cursor::new("cat\ndog\n")).unwrap();
        assert!(dict.contains("cat\n"));
        assert!(dict.contains("dog\n"));
        assert!(!dict.contains("cat"));
    }

    #[test]
    fn test_last_line_without_newline_is_its_own_key() {
        let dict = Dictionary::from_reader(Cursor::new("cat\ndog")).unwrap();
        assert!(dict.contains("dog"));
        assert!(!dict.contains("dog\n"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict = Dictionary::from_reader(Cursor::new("cat\ncat\ncat\n")).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_empty_source_is_empty_dictionary() {
        let dict = Dictionary::from_reader(Cursor::new("")).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Dictionary::load(Path::new("/nonexistent/wordlist_12345.txt"));
        assert!(matches!(result, Err(ScanError::IoError(_))));
    }

    #[test]
    fn test_invalid_utf8_aborts_load() {
        let result = Dictionary::from_reader(Cursor::new(b"cat\n\xff\n".to_vec()));
        assert!(matches!(result, Err(ScanError::InvalidEncoding(2))));
    }

    #[test]
    fn test_from_iterator() {
        let dict: Dictionary = ["cat\n", "dog\n"].iter().map(|e| e.to_string()).collect();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat\n"));
    }
}
