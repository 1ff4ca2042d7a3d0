use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::LoadError;

/// Extract the text of a PDF document using the pdf-extract crate.
///
/// The whole file is read into memory before extraction; the handle is
/// released when this returns.
pub fn load(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))
}
