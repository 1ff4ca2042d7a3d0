use std::io::{self, Write};

use crate::scanner::Token;

/// Writes one `Not found:` record per miss, in the order reported.
pub struct Reporter<W> {
    out: W,
    count: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Emit the record for one miss. The token is printed trimmed; its raw
    /// contents were already used for the membership test.
    pub fn report(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.out, "Not found: {}", token.trimmed())?;
        self.count += 1;
        Ok(())
    }

    /// Records written so far.
    pub fn count(&self) -> usize {
        self.count
    }
}
