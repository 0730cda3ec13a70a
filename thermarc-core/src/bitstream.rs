//! MSB-first variable-width bit packing.
//!
//! Frame residuals are packed as fixed-width codes of 1 to 16 bits with no
//! padding between values. Within each value the most significant bit is
//! written first, and values run across byte boundaries. Only the last byte
//! of a stream is padded, with zeros in its unused low bits.
//!
//! # Example
//!
//! ```
//! use thermarc_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_value(0b101, 3).unwrap();
//! writer.write_value(0b1100, 4).unwrap();
//! let data = writer.finish();
//! assert_eq!(data, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&data[..]);
//! assert_eq!(reader.read_value(3).unwrap(), 0b101);
//! assert_eq!(reader.read_value(4).unwrap(), 0b1100);
//! ```

use crate::error::{Result, ThermArcError};
use crate::twos;
use std::io::{ErrorKind, Read};

/// Largest width a single value may occupy.
pub const MAX_VALUE_BITS: u8 = 16;

/// Number of bytes needed to pack `count` values of `width` bits.
#[inline]
pub fn packed_len(count: usize, width: u8) -> usize {
    (count * width as usize).div_ceil(8)
}

#[inline]
fn check_width(width: u8) -> Result<()> {
    if width == 0 || width > MAX_VALUE_BITS {
        return Err(ThermArcError::InvalidBitWidth(width));
    }
    Ok(())
}

/// MSB-first bit writer over a growable byte buffer.
#[derive(Debug)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Pending bits, right-aligned.
    buffer: u32,
    /// Number of pending bits in `buffer` (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written through this writer.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create a writer with an empty output buffer.
    pub fn new() -> Self {
        Self::with_buffer(Vec::new())
    }

    /// Create a writer that appends after the bytes already in `output`.
    pub fn with_buffer(output: Vec<u8>) -> Self {
        Self {
            output,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Append the low `width` bits of `code`, most significant bit first.
    pub fn write_value(&mut self, code: u32, width: u8) -> Result<()> {
        check_width(width)?;

        self.buffer = (self.buffer << width) | (code & ((1u32 << width) - 1));
        self.bits_in_buffer += width;
        self.total_bits_written += width as u64;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            self.output.push((self.buffer >> self.bits_in_buffer) as u8);
        }
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;

        Ok(())
    }

    /// Append `value` as a `width`-bit two's complement code.
    ///
    /// The caller guarantees `value` fits (see [`crate::width::select_width`]).
    pub fn write_signed(&mut self, value: i32, width: u8) -> Result<()> {
        check_width(width)?;
        self.write_value(twos::encode(value, width), width)
    }

    /// Total bits written so far, excluding any prefix bytes.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Flush the partial final byte (zero-filled) and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << pad) as u8);
        }
        self.output
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader over any `Read` implementation.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Buffered bits, right-aligned.
    buffer: u32,
    /// Number of valid bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Total bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Bits buffered from a partially consumed byte are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self, requested: u8) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    return Err(ThermArcError::stream_underrun(
                        self.total_bits_read,
                        requested,
                    ));
                }
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read exactly `width` bits as an unsigned code.
    pub fn read_value(&mut self, width: u8) -> Result<u32> {
        check_width(width)?;

        while self.bits_in_buffer < width {
            let byte = self.next_byte(width)?;
            self.buffer = (self.buffer << 8) | byte as u32;
            self.bits_in_buffer += 8;
        }

        self.bits_in_buffer -= width;
        let value = (self.buffer >> self.bits_in_buffer) & ((1u32 << width) - 1);
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;
        self.total_bits_read += width as u64;

        Ok(value)
    }

    /// Read a `width`-bit two's complement code as a signed value.
    pub fn read_signed(&mut self, width: u8) -> Result<i32> {
        let code = self.read_value(width)?;
        Ok(twos::decode(code, width))
    }
}
