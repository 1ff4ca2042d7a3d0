use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod epub;
pub mod pdf;

/// Open a document as a buffered line source, dispatching on file extension.
///
/// Plain text is the default and is streamed straight from the file. PDF and
/// EPUB documents are extracted to text in memory first, then scanned with the
/// same line semantics.
pub fn open_document(path: &Path) -> Result<Box<dyn BufRead>, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => Ok(Box::new(Cursor::new(pdf::load(path)?))),
        Some("epub") => Ok(Box::new(Cursor::new(epub::load(path)?))),
        _ => {
            if !path.exists() {
                return Err(LoadError::FileNotFound(path.to_path_buf()));
            }
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_open_document_missing_plain_file() {
        let result = open_document(Path::new("/nonexistent/document_12345.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_open_document_missing_pdf() {
        let result = open_document(Path::new("/nonexistent/document.pdf"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_open_document_missing_epub() {
        let result = open_document(Path::new("/nonexistent/book.epub"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_open_document_plain_text_streams_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"cat\nbird\n").unwrap();

        let mut reader = open_document(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "cat\nbird\n");
    }

    #[test]
    fn test_open_document_unknown_extension_is_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.list");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"cat\n").unwrap();

        let mut reader = open_document(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "cat\n");
    }
}
