use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::MemoryStream;

// The inherent `read`/`write`/`seek` take precedence on a concrete
// `MemoryStream`, so these impls are reached through generics or
// fully qualified calls such as `io::Seek::seek(&mut stream, ..)`.

impl Read for MemoryStream {
    /// Returns `Ok(0)` once the cursor sits at the end of the data.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(MemoryStream::read(self, buf).count())
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(MemoryStream::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemoryStream {
    /// `SeekFrom::End(n)` targets `len + n`, as it does for files.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(offset) => {
                i128::from(self.position()) + i128::from(offset)
            }
            SeekFrom::End(offset) => self.len() as i128 + i128::from(offset),
        };
        Ok(self.seek_to(target)?)
    }
}
