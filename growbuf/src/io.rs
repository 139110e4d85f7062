use std::io::{self, Read, Write};

use crate::buffer::Buffer;

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    /// Appends everything the reader yields, growing on demand.
    /// Returns the number of bytes read.
    ///
    /// # Errors
    ///
    /// From the underlying reader.
    pub fn read_from(&mut self, reader: &mut dyn Read) -> io::Result<usize> {
        let mut chunk = [0u8; 4096];
        let mut total = 0;
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                return Ok(total);
            }
            self.write_bytes(&chunk[..n]);
            total += n;
        }
    }

    /// Writes the whole content to a sink.
    ///
    /// # Errors
    ///
    /// From the underlying writer.
    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}
