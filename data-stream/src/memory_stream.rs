use std::fmt;

use data_error::{Result, StreamError};

use crate::{Whence, DEFAULT_CAPACITY};

/// Result of [`MemoryStream::read`].
///
/// Both variants carry the number of bytes copied into the destination.
/// `EndOfStream` means the cursor has reached the end of the written data,
/// but the bytes counted on that same call are still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Data(usize),
    EndOfStream(usize),
}

impl ReadOutcome {
    pub fn count(&self) -> usize {
        match *self {
            ReadOutcome::Data(count) | ReadOutcome::EndOfStream(count) => count,
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadOutcome::EndOfStream(_))
    }
}

/// Growable in-memory byte buffer with a cursor, used like a file handle.
///
/// Invariants held after every operation:
/// - `cursor <= len <= capacity`
/// - bytes in `[0, len)` are exactly the bytes written, later writes
///   overwriting earlier ones in place
/// - nothing outside `[0, len)` is ever handed to a reader
///
/// There is no internal synchronization. Sharing an instance between threads
/// requires external locking around every call.
#[derive(Clone)]
pub struct MemoryStream {
    /// Backing storage, its length is the physical capacity
    storage: Box<[u8]>,
    /// Number of meaningful bytes at the front of `storage`
    len: usize,
    /// Offset where the next read or write begins
    cursor: usize,
}

impl MemoryStream {
    /// Create an empty stream with [`DEFAULT_CAPACITY`] bytes preallocated
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty stream with exactly `capacity` bytes preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity].into_boxed_slice(),
            len: 0,
            cursor: 0,
        }
    }

    /// Move the cursor and return its new value.
    ///
    /// Targets past the end land exactly at the end. A negative target fails
    /// with [`StreamError::InvalidSeek`] and leaves the cursor untouched, so
    /// `seek(0, Whence::Current)` doubles as "tell".
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<u64> {
        let offset = i128::from(offset);
        let target = match whence {
            Whence::Origin => offset,
            Whence::Current => self.cursor as i128 + offset,
            Whence::End => self.len as i128 - offset,
        };
        self.seek_to(target)
    }

    pub(crate) fn seek_to(&mut self, target: i128) -> Result<u64> {
        if target < 0 {
            log::warn!(
                "Rejected seek to {} (cursor {}, length {})",
                target,
                self.cursor,
                self.len
            );
            return Err(StreamError::InvalidSeek {
                target,
                position: self.cursor as u64,
            });
        }

        self.cursor = usize::try_from(target)
            .map_or(self.len, |target| target.min(self.len));
        log::trace!("Cursor moved to {} of {}", self.cursor, self.len);

        Ok(self.cursor as u64)
    }

    /// Copy bytes from the cursor into `dst` and advance past them.
    ///
    /// Copies `min(dst.len(), len - cursor)` bytes. Returns
    /// [`ReadOutcome::EndOfStream`] whenever the cursor ends up at the end of
    /// the data, including when there was nothing left to read.
    pub fn read(&mut self, dst: &mut [u8]) -> ReadOutcome {
        let remaining = &self.storage[self.cursor..self.len];
        let count = dst.len().min(remaining.len());
        dst[..count].copy_from_slice(&remaining[..count]);
        self.cursor += count;

        log::trace!("Read {} bytes, cursor at {}", count, self.cursor);
        if self.cursor == self.len {
            ReadOutcome::EndOfStream(count)
        } else {
            ReadOutcome::Data(count)
        }
    }

    /// Write all of `src` at the cursor, overwriting existing bytes and
    /// extending the length as needed. Always returns `src.len()`.
    ///
    /// Running out of memory while growing is fatal, it is not reported
    /// as an error.
    pub fn write(&mut self, src: &[u8]) -> usize {
        self.reserve_for(src.len());

        let end = self.cursor + src.len();
        self.storage[self.cursor..end].copy_from_slice(src);
        self.cursor = end;
        self.len = self.len.max(end);

        log::trace!("Wrote {} bytes, length now {}", src.len(), self.len);
        src.len()
    }

    /// Logical contents `[0, len)`, independent of the cursor.
    ///
    /// The view borrows the stream and so cannot be held across a write.
    /// Use [`to_vec`](Self::to_vec) for a copy that outlives later writes.
    pub fn snapshot(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.snapshot().to_vec()
    }

    /// Consume the stream and return its logical contents
    pub fn into_inner(self) -> Vec<u8> {
        let mut bytes = self.storage.into_vec();
        bytes.truncate(self.len);
        bytes
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn position(&self) -> u64 {
        self.cursor as u64
    }

    /// Make room for `incoming` bytes at the cursor.
    fn reserve_for(&mut self, incoming: usize) {
        let capacity = self.storage.len();
        if capacity - self.cursor >= incoming {
            return;
        }

        let new_capacity = grown_capacity(capacity, incoming);
        let mut storage = vec![0; new_capacity].into_boxed_slice();
        storage[..self.len].copy_from_slice(&self.storage[..self.len]);
        self.storage = storage;

        log::debug!(
            "Expanded memory stream to {} bytes from {}",
            new_capacity,
            capacity
        );
    }
}

/// Capacity after one growth step: doubles, or grows by exactly `incoming`
/// when a single write is larger than the current capacity.
///
/// Keeps the number of reallocations logarithmic in the bytes written.
fn grown_capacity(capacity: usize, incoming: usize) -> usize {
    capacity.saturating_add(capacity.max(incoming))
}

impl Default for MemoryStream {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for MemoryStream {
    fn as_ref(&self) -> &[u8] {
        self.snapshot()
    }
}

impl fmt::Debug for MemoryStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStream")
            .field("len", &self.len)
            .field("capacity", &self.storage.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
