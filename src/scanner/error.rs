use std::fmt;
use std::io;

pub enum ScanError {
    IoError(io::Error),
    InvalidEncoding(usize),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::IoError(err) => write!(f, "I/O error: {}", err),
            ScanError::InvalidEncoding(line) => {
                write!(f, "invalid UTF-8 on line {}", line)
            }
        }
    }
}

impl fmt::Debug for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for ScanError {}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::IoError(err)
    }
}
