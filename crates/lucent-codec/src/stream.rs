//! Byte-order-aware typed binary streams.
//!
//! `BinaryStream` wraps any `Read`/`Write`/`Seek` source and provides
//! fixed-width integer and float access, length-prefixed strings, bulk
//! float arrays at both on-disk widths, and transparent zlib
//! continuation views for the compressed portions of mesh files.

use std::io::{Read, Seek, SeekFrom, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lucent_types::{LucentError, LucentResult};

/// Byte order of the serialized representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

/// A typed view over a raw byte stream.
#[derive(Debug)]
pub struct BinaryStream<S> {
    inner: S,
    order: ByteOrder,
}

impl<S> BinaryStream<S> {
    /// Wraps `inner` with little-endian byte order.
    pub fn new(inner: S) -> Self {
        Self::with_order(inner, ByteOrder::LittleEndian)
    }

    /// Wraps `inner` with an explicit byte order.
    pub fn with_order(inner: S, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    /// Returns the stream's byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

macro_rules! read_scalar {
    ($name:ident, $ty:ty) => {
        /// Reads one scalar at the stream's byte order.
        pub fn $name(&mut self) -> LucentResult<$ty> {
            let mut buf = [0u8; std::mem::size_of::<$ty>()];
            self.inner.read_exact(&mut buf)?;
            Ok(match self.order {
                ByteOrder::LittleEndian => <$ty>::from_le_bytes(buf),
                ByteOrder::BigEndian => <$ty>::from_be_bytes(buf),
            })
        }
    };
}

macro_rules! write_scalar {
    ($name:ident, $ty:ty) => {
        /// Writes one scalar at the stream's byte order.
        pub fn $name(&mut self, value: $ty) -> LucentResult<()> {
            let bytes = match self.order {
                ByteOrder::LittleEndian => value.to_le_bytes(),
                ByteOrder::BigEndian => value.to_be_bytes(),
            };
            self.inner.write_all(&bytes)?;
            Ok(())
        }
    };
}

impl<S: Read> BinaryStream<S> {
    read_scalar!(read_u16, u16);
    read_scalar!(read_u32, u32);
    read_scalar!(read_u64, u64);
    read_scalar!(read_f32, f32);
    read_scalar!(read_f64, f64);

    /// Reads a u32-length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> LucentResult<String> {
        let len = self.read_u32()? as usize;
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|_| LucentError::Format("string field is not valid UTF-8".into()))
    }

    /// Reads `count` consecutive f32 values.
    pub fn read_f32_array(&mut self, count: usize) -> LucentResult<Vec<f32>> {
        let mut bytes = vec![0u8; count * 4];
        self.inner.read_exact(&mut bytes)?;
        let order = self.order;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| {
                let b = [c[0], c[1], c[2], c[3]];
                match order {
                    ByteOrder::LittleEndian => f32::from_le_bytes(b),
                    ByteOrder::BigEndian => f32::from_be_bytes(b),
                }
            })
            .collect())
    }

    /// Reads `count` consecutive f64 values.
    pub fn read_f64_array(&mut self, count: usize) -> LucentResult<Vec<f64>> {
        let mut bytes = vec![0u8; count * 8];
        self.inner.read_exact(&mut bytes)?;
        let order = self.order;
        Ok(bytes
            .chunks_exact(8)
            .map(|c| {
                let b = [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]];
                match order {
                    ByteOrder::LittleEndian => f64::from_le_bytes(b),
                    ByteOrder::BigEndian => f64::from_be_bytes(b),
                }
            })
            .collect())
    }

    /// Reads `count` consecutive u32 values.
    pub fn read_u32_array(&mut self, count: usize) -> LucentResult<Vec<u32>> {
        let mut bytes = vec![0u8; count * 4];
        self.inner.read_exact(&mut bytes)?;
        let order = self.order;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| {
                let b = [c[0], c[1], c[2], c[3]];
                match order {
                    ByteOrder::LittleEndian => u32::from_le_bytes(b),
                    ByteOrder::BigEndian => u32::from_be_bytes(b),
                }
            })
            .collect())
    }

    /// Continues this stream as a transparent zlib decompression view
    /// starting at the current position.
    pub fn zlib_view(&mut self) -> BinaryStream<ZlibDecoder<&mut S>> {
        BinaryStream::with_order(ZlibDecoder::new(&mut self.inner), self.order)
    }
}

impl<S: Write> BinaryStream<S> {
    write_scalar!(write_u16, u16);
    write_scalar!(write_u32, u32);
    write_scalar!(write_u64, u64);
    write_scalar!(write_f32, f32);
    write_scalar!(write_f64, f64);

    /// Writes a u32-length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> LucentResult<()> {
        self.write_u32(value.len() as u32)?;
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    /// Writes all values of an f32 slice.
    pub fn write_f32_array(&mut self, values: &[f32]) -> LucentResult<()> {
        for &v in values {
            self.write_f32(v)?;
        }
        Ok(())
    }

    /// Writes all values of an f64 slice.
    pub fn write_f64_array(&mut self, values: &[f64]) -> LucentResult<()> {
        for &v in values {
            self.write_f64(v)?;
        }
        Ok(())
    }

    /// Writes all values of a u32 slice.
    pub fn write_u32_array(&mut self, values: &[u32]) -> LucentResult<()> {
        for &v in values {
            self.write_u32(v)?;
        }
        Ok(())
    }

    /// Continues this stream as a transparent zlib compression view.
    ///
    /// Call [`finish`](BinaryStream::finish) on the view to flush the
    /// compressed trailer before using the underlying stream again.
    pub fn zlib_writer(&mut self) -> BinaryStream<ZlibEncoder<&mut S>> {
        BinaryStream::with_order(
            ZlibEncoder::new(&mut self.inner, Compression::default()),
            self.order,
        )
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> LucentResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: Write> BinaryStream<ZlibEncoder<W>> {
    /// Finishes the compressed stream, flushing the zlib trailer.
    pub fn finish(self) -> LucentResult<W> {
        Ok(self.inner.finish()?)
    }
}

impl<S: Seek> BinaryStream<S> {
    /// Seeks to an absolute byte offset.
    pub fn seek(&mut self, pos: u64) -> LucentResult<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Skips `count` bytes forward from the current position.
    pub fn skip(&mut self, count: i64) -> LucentResult<()> {
        self.inner.seek(SeekFrom::Current(count))?;
        Ok(())
    }

    /// Returns the current byte offset.
    pub fn position(&mut self) -> LucentResult<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Returns the total stream size, preserving the current position.
    pub fn size(&mut self) -> LucentResult<u64> {
        let current = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(current))?;
        Ok(end)
    }
}
