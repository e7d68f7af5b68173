//! Byte sinks for render tests.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// A writer that accepts `budget` bytes and then fails every write with
/// `BrokenPipe`.
#[derive(Debug, Default)]
pub struct FailingWriter {
    pub written: Vec<u8>,
    budget: usize,
}

impl FailingWriter {
    pub fn new(budget: usize) -> FailingWriter {
        FailingWriter {
            written: Vec::new(),
            budget,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.budget - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates an anonymous temporary file for use as a sink.
pub fn temp_file() -> File {
    tempfile::tempfile().expect("failed to create temporary file")
}

/// Rewinds `file` and reads its entire contents as UTF-8.
pub fn read_temp_file(file: &mut File) -> String {
    file.seek(SeekFrom::Start(0)).expect("seek");
    let mut text = String::new();
    file.read_to_string(&mut text).expect("read");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_writer() {
        let mut w = FailingWriter::new(4);
        assert!(w.write_all(b"abcdef").is_err());
        assert_eq!(w.written, b"abcd");
    }

    #[test]
    fn test_temp_file_round_trip() {
        let mut f = temp_file();
        f.write_all(b"hello").unwrap();
        assert_eq!(read_temp_file(&mut f), "hello");
    }
}
