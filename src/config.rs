use std::path::PathBuf;

/// Input locations for a single run.
///
/// Both paths are configuration constants with fixed defaults; there is no
/// flag or environment override surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reference word list, one entry per line (default "wordlist.txt")
    pub dictionary_path: PathBuf,

    /// Document to check, one word-candidate per line (default "document.txt")
    pub document_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("wordlist.txt"),
            document_path: PathBuf::from("document.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.dictionary_path, PathBuf::from("wordlist.txt"));
        assert_eq!(config.document_path, PathBuf::from("document.txt"));
    }
}
