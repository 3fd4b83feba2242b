/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`EndianRead`] and [`EndianSeek`] for a borrowed
/// slice.
///
/// The byte order is fixed by the type parameter `E`. Reads are checked
/// against the size of the slice: the methods of [`EndianRead`] panic when
/// they would go past the end, while their `try_` counterparts return a
/// [`StreamError`] and leave the position unchanged.
///
/// # Example
/// ```
/// use endian_stream::prelude::*;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
///
/// let mut reader = <EndianStreamReader<BE>>::new(&data);
///
/// // the stream is read sequentially
/// assert_eq!(reader.size(), 7);
/// assert_eq!(reader.read::<u8>(), 0x01);
/// assert_eq!(reader.read::<u16>(), 0x0203);
/// assert_eq!(reader.position(), 3);
/// assert_eq!(reader.read::<U24>(), 0x040506);
///
/// // errored reads don't change the current position
/// assert!(reader.try_read::<u16>().is_err());
/// assert_eq!(reader.position(), 6);
///
/// // you can change position
/// reader.seek(1);
/// assert_eq!(reader.read::<i16>(), 0x0203);
/// assert!(reader.try_seek(8).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct EndianStreamReader<'a, E: Endianness> {
    data: &'a [u8],
    position: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<'a, E: Endianness> EndianStreamReader<'a, E> {
    /// Create a new [`EndianStreamReader`] over the whole of `data`.
    ///
    /// # Panics
    ///
    /// If `data` is empty.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        assert!(!data.is_empty(), "Cannot create a stream on an empty buffer");
        Self {
            data,
            position: 0,
            _marker: Default::default(),
        }
    }

    /// Create a new [`EndianStreamReader`] over the first `size` bytes of
    /// `data`.
    ///
    /// # Panics
    ///
    /// If `size` is zero or greater than the length of `data`.
    #[must_use]
    pub fn with_size(data: &'a [u8], size: usize) -> Self {
        assert!(
            size <= data.len(),
            "Stream size {} exceeds the buffer length {}",
            size,
            data.len()
        );
        Self::new(&data[..size])
    }

    /// The bytes of the stream, regardless of the current position.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Decode a value of width `W` at the current position without advancing.
    pub fn try_peek<W: Width>(&self) -> Result<W::Value, StreamError> {
        check_bounds(self.position, W::BYTES, self.data.len())?;
        Ok(W::get::<E>(&self.data[self.position..]))
    }

    /// Decode a value of width `W` at the current position without advancing.
    ///
    /// # Panics
    ///
    /// If fewer than [`W::BYTES`](Width::BYTES) bytes remain.
    pub fn peek<W: Width>(&self) -> W::Value {
        match self.try_peek::<W>() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Borrow the next `len` bytes of the buffer and advance past them.
    ///
    /// This is the zero-copy version of [`EndianRead::try_read_bytes`].
    pub fn try_read_slice(&mut self, len: usize) -> Result<&'a [u8], StreamError> {
        check_bounds(self.position, len, self.data.len())?;
        let slice = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    /// Borrow the next `len` bytes of the buffer and advance past them.
    ///
    /// # Panics
    ///
    /// If fewer than `len` bytes remain.
    pub fn read_slice(&mut self, len: usize) -> &'a [u8] {
        match self.try_read_slice(len) {
            Ok(slice) => slice,
            Err(e) => panic!("{}", e),
        }
    }

    /// Advance the position by `len` bytes without decoding them.
    pub fn try_skip(&mut self, len: usize) -> Result<(), StreamError> {
        check_bounds(self.position, len, self.data.len())?;
        self.position += len;
        Ok(())
    }

    /// Advance the position by `len` bytes without decoding them.
    ///
    /// # Panics
    ///
    /// If fewer than `len` bytes remain.
    pub fn skip(&mut self, len: usize) {
        if let Err(e) = self.try_skip(len) {
            panic!("{}", e);
        }
    }
}

impl<E: Endianness> EndianSeek for EndianStreamReader<'_, E> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn position(&self) -> usize {
        self.position
    }

    #[inline(always)]
    fn try_seek(&mut self, position: usize) -> Result<(), StreamError> {
        check_bounds(position, 0, self.data.len())?;
        self.position = position;
        Ok(())
    }
}

impl<E: Endianness> EndianRead<E> for EndianStreamReader<'_, E> {
    #[inline(always)]
    fn try_read<W: Width>(&mut self) -> Result<W::Value, StreamError> {
        let value = self.try_peek::<W>()?;
        self.position += W::BYTES;
        Ok(value)
    }

    #[inline]
    fn try_read_bytes(&mut self, dest: &mut [u8]) -> Result<(), StreamError> {
        let src = self.try_read_slice(dest.len())?;
        dest.copy_from_slice(src);
        Ok(())
    }
}

#[test]
fn test_read_slice() {
    let data = [1, 2, 3, 4, 5];
    let mut reader = <EndianStreamReader<LE>>::new(&data);
    reader.skip(1);
    assert_eq!(reader.read_slice(3), &[2, 3, 4]);
    assert_eq!(reader.remaining(), 1);
    assert!(reader.try_read_slice(2).is_err());
    assert_eq!(reader.read_slice(1), &[5]);
    assert_eq!(reader.read_slice(0), &[] as &[u8]);
    assert_eq!(reader.as_slice(), &data);
}

#[test]
fn test_peek() {
    let data = [0x12, 0x34];
    let reader = <EndianStreamReader<LE>>::new(&data);
    assert_eq!(reader.peek::<u16>(), 0x3412);
    assert_eq!(reader.peek::<u8>(), 0x12);
    assert_eq!(reader.position(), 0);
    assert!(reader.try_peek::<U24>().is_err());
}

#[test]
fn test_with_size() {
    let data = [0xFF; 16];
    let mut reader = <EndianStreamReader<BE>>::with_size(&data, 4);
    assert_eq!(reader.size(), 4);
    assert!(reader.try_read::<u64>().is_err());
    assert_eq!(reader.read::<u32>(), u32::MAX);
}

#[test]
#[should_panic]
fn test_empty() {
    let _ = <EndianStreamReader<BE>>::new(&[]);
}

#[test]
#[should_panic]
fn test_with_size_zero() {
    let data = [1, 2, 3];
    let _ = <EndianStreamReader<LE>>::with_size(&data, 0);
}
