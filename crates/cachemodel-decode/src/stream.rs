//! Byte cursor used by the record decoder.

use crate::error::{DecodeError, DecodeResult};

/// Offset subtracted from two-byte smart values.
const SMART_TWO_BYTE_BIAS: i32 = 0xC000;

/// Offset subtracted from one-byte smart values.
const SMART_ONE_BYTE_BIAS: i32 = 0x40;

/// A cursor over a borrowed record buffer.
///
/// All multi-byte reads are big-endian. A failed read leaves the cursor
/// where it was.
///
/// # Example
///
/// ```
/// use cachemodel_decode::ByteStream;
///
/// let data = [0x01, 0x02, 0x03, 0x7f];
/// let mut stream = ByteStream::new(&data);
///
/// assert_eq!(stream.read_u8(), Ok(0x01));
/// assert_eq!(stream.read_u16(), Ok(0x0203));
/// assert_eq!(stream.read_smart_signed(), Ok(63));
/// assert!(stream.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteStream<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteStream<'a> {
    /// Create a stream positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Total length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Move the cursor to an absolute offset. Seeking to the end is allowed.
    pub fn seek(&mut self, position: usize) -> DecodeResult<()> {
        if position > self.data.len() {
            return Err(DecodeError::BufferUnderflow {
                offset: position,
                needed: 0,
                remaining: 0,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Move the cursor back to the start of the buffer.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Advance the cursor without looking at the bytes.
    pub fn skip(&mut self, count: usize) -> DecodeResult<()> {
        self.take(count).map(|_| ())
    }

    /// Borrow the next `count` bytes and advance past them.
    pub fn read_bytes(&mut self, count: usize) -> DecodeResult<&'a [u8]> {
        self.take(count)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> DecodeResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or_else(|| self.underflow(1))
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        let bytes = self.take(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read a signed smart value.
    ///
    /// A leading byte below 128 is a one-byte value in `[-64, 63]`;
    /// otherwise two bytes are consumed, giving `[-16384, 16383]`.
    pub fn read_smart_signed(&mut self) -> DecodeResult<i32> {
        if self.peek_u8()? < 128 {
            Ok(i32::from(self.read_u8()?) - SMART_ONE_BYTE_BIAS)
        } else {
            Ok(i32::from(self.read_u16()?) - SMART_TWO_BYTE_BIAS)
        }
    }

    fn take(&mut self, count: usize) -> DecodeResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(self.underflow(count));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    fn underflow(&self, needed: usize) -> DecodeError {
        DecodeError::BufferUnderflow {
            offset: self.position,
            needed,
            remaining: self.remaining(),
        }
    }
}
