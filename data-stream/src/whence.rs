use data_error::StreamError;

/// Reference point that a seek offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// `target = offset`
    Origin = 0,
    /// `target = cursor + offset`
    Current = 1,
    /// `target = length - offset`
    End = 2,
}

impl TryFrom<i32> for Whence {
    type Error = StreamError;

    /// Decodes the conventional `0`/`1`/`2` whence codes.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Whence::Origin),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            other => Err(StreamError::InvalidWhence(other)),
        }
    }
}
