use std::io::BufRead;

use super::ScanError;

/// Iterator over the raw lines of a reader, line terminators included.
///
/// Membership keys and document tokens are both produced by this type, so the
/// two sides of the comparison split text identically. A line is everything up
/// to and including the next `\n`; the final line keeps whatever terminator it
/// has, possibly none.
pub struct RawLines<R> {
    reader: R,
    line: usize,
    done: bool,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            done: false,
        }
    }

    /// 1-based number of the most recently yielded line.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                match String::from_utf8(buf) {
                    Ok(raw) => Some(Ok(raw)),
                    Err(_) => {
                        self.done = true;
                        Some(Err(ScanError::InvalidEncoding(self.line)))
                    }
                }
            }
            Err(err) => {
                self.done = true;
                Some(Err(ScanError::IoError(err)))
            }
        }
    }
}
