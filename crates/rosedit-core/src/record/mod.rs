//! Zero-copy window over one fixed-size record
//!
//! A `RecordView` binds the roster buffer to a record base offset and exposes
//! the byte- and bit-level primitives the typed accessors are built from.
//! Construction proves the whole record lies inside the buffer, so in-record
//! field access cannot silently run past the end of the file.

use crate::error::{Error, Result};
use crate::layout::{FieldDescriptor, Placement, ValueCodec, display_to_raw, raw_to_display};
use crate::stream::BitCursor;

#[derive(Debug)]
pub struct RecordView<'a> {
    buf: &'a mut [u8],
    base: usize,
}

impl<'a> RecordView<'a> {
    /// Bind `record_size` bytes at `base`; fails if the record would overrun
    /// the buffer.
    pub fn new(buf: &'a mut [u8], base: usize, record_size: usize) -> Result<Self> {
        let end = base
            .checked_add(record_size)
            .ok_or_else(|| Error::out_of_range("record extent overflows usize"))?;
        if end > buf.len() {
            return Err(Error::out_of_range(format!(
                "record at {base}..{end} exceeds buffer of {} bytes",
                buf.len()
            )));
        }
        Ok(Self { buf, base })
    }

    /// Absolute byte offset of the record base inside the buffer.
    pub fn base(&self) -> usize {
        self.base
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    fn span(&self, offset: usize, width: usize) -> Result<usize> {
        let start = self
            .base
            .checked_add(offset)
            .ok_or_else(|| Error::out_of_range("field offset overflows usize"))?;
        let end = start
            .checked_add(width)
            .ok_or_else(|| Error::out_of_range("field offset overflows usize"))?;
        if end > self.buf.len() {
            return Err(Error::out_of_range(format!(
                "field at record offset {offset} (width {width}) exceeds buffer of {} bytes",
                self.buf.len()
            )));
        }
        Ok(start)
    }

    pub fn byte_at(&self, offset: usize) -> Result<u8> {
        let start = self.span(offset, 1)?;
        Ok(self.buf[start])
    }

    pub fn write_byte_at(&mut self, offset: usize, value: u8) -> Result<()> {
        let start = self.span(offset, 1)?;
        self.buf[start] = value;
        Ok(())
    }

    pub fn u16_le_at(&self, offset: usize) -> Result<u16> {
        let start = self.span(offset, 2)?;
        Ok(u16::from_le_bytes([self.buf[start], self.buf[start + 1]]))
    }

    pub fn write_u16_le_at(&mut self, offset: usize, value: u16) -> Result<()> {
        let start = self.span(offset, 2)?;
        self.buf[start..start + 2].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn u32_le_at(&self, offset: usize) -> Result<u32> {
        let start = self.span(offset, 4)?;
        let bytes = [
            self.buf[start],
            self.buf[start + 1],
            self.buf[start + 2],
            self.buf[start + 3],
        ];
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn write_u32_le_at(&mut self, offset: usize, value: u32) -> Result<()> {
        let start = self.span(offset, 4)?;
        self.buf[start..start + 4].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Read `count` bits at record-relative `(byte, bit)`, MSB-first.
    pub fn bits_at(&self, byte_offset: usize, bit_offset: u8, count: u32) -> Result<u32> {
        let mut cursor = BitCursor::new(&*self.buf);
        cursor.seek(self.base, 0)?;
        cursor.seek_relative(byte_offset as i64, i64::from(bit_offset))?;
        cursor.read_bits(count)
    }

    /// Write the low `count` bits of `value` at record-relative `(byte, bit)`.
    pub fn write_bits_at(
        &mut self,
        byte_offset: usize,
        bit_offset: u8,
        count: u32,
        value: u32,
    ) -> Result<()> {
        let base = self.base;
        let mut cursor = BitCursor::new(&mut *self.buf);
        cursor.seek(base, 0)?;
        cursor.seek_relative(byte_offset as i64, i64::from(bit_offset))?;
        cursor.write_bits(value, count)
    }

    /// Read a fixed-capacity ASCII window as a string.
    ///
    /// The window is treated as NUL-terminated printable ASCII; the first
    /// byte outside 32..=126 ends the string.
    pub fn ascii_at(&self, offset: usize, capacity: usize) -> Result<String> {
        let start = self.span(offset, capacity)?;
        let mut out = String::with_capacity(capacity);
        for &byte in &self.buf[start..start + capacity] {
            if !(32..=126).contains(&byte) {
                break;
            }
            out.push(byte as char);
        }
        Ok(out)
    }

    /// Zero-fill a fixed-capacity window and copy `text` into it, truncated
    /// to capacity.
    pub fn write_ascii_at(&mut self, offset: usize, capacity: usize, text: &str) -> Result<()> {
        let start = self.span(offset, capacity)?;
        let window = &mut self.buf[start..start + capacity];
        window.fill(0);
        for (slot, byte) in window.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
        Ok(())
    }

    /// Read a field through its descriptor, decoding per its codec.
    pub fn read_field(&self, field: FieldDescriptor) -> Result<i64> {
        let raw = self.read_raw(field.placement)?;
        Ok(match field.codec {
            ValueCodec::Identity => i64::from(raw),
            ValueCodec::DisplayRating => raw_to_display(raw as u8),
            ValueCodec::TendencyMasked => i64::from(raw & 0x7F),
        })
    }

    /// Write a field through its descriptor, encoding per its codec.
    pub fn write_field(&mut self, field: FieldDescriptor, value: i64) -> Result<()> {
        let raw = match field.codec {
            ValueCodec::Identity => value as u32,
            ValueCodec::DisplayRating => u32::from(display_to_raw(value)),
            ValueCodec::TendencyMasked => {
                let current = self.read_raw(field.placement)?;
                (current & 0x80) | (value as u32 & 0x7F)
            }
        };
        self.write_raw(field.placement, raw)
    }

    fn read_raw(&self, placement: Placement) -> Result<u32> {
        match placement {
            Placement::Byte(offset) => Ok(u32::from(self.byte_at(offset)?)),
            Placement::U16Le(offset) => Ok(u32::from(self.u16_le_at(offset)?)),
            Placement::U32Le(offset) => self.u32_le_at(offset),
            Placement::Bits { byte, bit, width } => self.bits_at(byte, bit, u32::from(width)),
        }
    }

    fn write_raw(&mut self, placement: Placement, raw: u32) -> Result<()> {
        match placement {
            Placement::Byte(offset) => self.write_byte_at(offset, raw as u8),
            Placement::U16Le(offset) => self.write_u16_le_at(offset, raw as u16),
            Placement::U32Le(offset) => self.write_u32_le_at(offset, raw),
            Placement::Bits { byte, bit, width } => {
                let mask = (1u64 << width) - 1;
                self.write_bits_at(byte, bit, u32::from(width), raw & mask as u32)
            }
        }
    }
}
