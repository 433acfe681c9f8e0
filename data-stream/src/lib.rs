//! Resizable in-memory byte buffer that reads, writes and seeks like a file.
//!
//! ```
//! use data_stream::{MemoryStream, ReadOutcome, Whence};
//!
//! let mut stream = MemoryStream::new();
//! assert_eq!(stream.write(b"abcdefg"), 7);
//! assert_eq!(stream.seek(0, Whence::Origin).unwrap(), 0);
//!
//! let mut buf = [0u8; 100];
//! assert_eq!(stream.read(&mut buf), ReadOutcome::EndOfStream(7));
//! assert_eq!(&buf[..7], b"abcdefg");
//! ```
mod memory_stream;
mod std_io;
mod whence;

pub use data_error::{Result, StreamError};
pub use memory_stream::{MemoryStream, ReadOutcome};
pub use whence::Whence;

/// Capacity in bytes of a stream created with [`MemoryStream::new`]
pub const DEFAULT_CAPACITY: usize = 512;
