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

/// An implementation of [`EndianWrite`] and [`EndianSeek`] for a borrowed
/// mutable slice.
///
/// The stream never grows: writes past the end of the slice panic, or return
/// a [`StreamError`] in the case of the `try_` methods, in which case neither
/// the position nor the buffer are modified.
///
/// # Example
/// ```
/// use endian_stream::prelude::*;
///
/// let mut data = [0_u8; 7];
///
/// let mut writer = <EndianStreamWriter<LE>>::new(&mut data);
///
/// writer.write::<u8>(1);
/// writer.write::<u16>(0x0203);
/// writer.write::<u32>(0x04050607);
/// assert_eq!(writer.position(), 7);
/// assert_eq!(writer.written(), &[1, 3, 2, 7, 6, 5, 4]);
///
/// // the stream is full
/// assert!(writer.try_write::<u8>(8).is_err());
///
/// // we can go back and overwrite
/// writer.seek(1);
/// writer.write::<i16>(-1);
/// assert_eq!(writer.into_inner(), &[1, 0xFF, 0xFF, 7, 6, 5, 4]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct EndianStreamWriter<'a, E: Endianness> {
    data: &'a mut [u8],
    position: usize,
    _marker: core::marker::PhantomData<E>,
}

impl<'a, E: Endianness> EndianStreamWriter<'a, E> {
    /// Create a new [`EndianStreamWriter`] over the whole of `data`.
    ///
    /// # Panics
    ///
    /// If `data` is empty.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        assert!(!data.is_empty(), "Cannot create a stream on an empty buffer");
        Self {
            data,
            position: 0,
            _marker: Default::default(),
        }
    }

    /// Create a new [`EndianStreamWriter`] over the first `size` bytes of
    /// `data`.
    ///
    /// # Panics
    ///
    /// If `size` is zero or greater than the length of `data`.
    #[must_use]
    pub fn with_size(data: &'a mut [u8], size: usize) -> Self {
        assert!(
            size <= data.len(),
            "Stream size {} exceeds the buffer length {}",
            size,
            data.len()
        );
        Self::new(&mut data[..size])
    }

    /// The bytes before the current position.
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position]
    }

    /// Give back the underlying buffer (restricted to the size of the stream).
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }

    /// Advance the position by `len` bytes, leaving them untouched.
    pub fn try_skip(&mut self, len: usize) -> Result<(), StreamError> {
        check_bounds(self.position, len, self.data.len())?;
        self.position += len;
        Ok(())
    }

    /// Advance the position by `len` bytes, leaving them untouched.
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

impl<E: Endianness> EndianSeek for EndianStreamWriter<'_, E> {
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

impl<E: Endianness> EndianWrite<E> for EndianStreamWriter<'_, E> {
    #[inline(always)]
    fn try_write<W: Width>(&mut self, value: W::Value) -> Result<(), StreamError> {
        check_bounds(self.position, W::BYTES, self.data.len())?;
        W::put::<E>(value, &mut self.data[self.position..]);
        self.position += W::BYTES;
        Ok(())
    }

    #[inline]
    fn try_write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError> {
        check_bounds(self.position, src.len(), self.data.len())?;
        self.data[self.position..self.position + src.len()].copy_from_slice(src);
        self.position += src.len();
        Ok(())
    }
}

#[test]
fn test_failed_write_is_noop() {
    let mut data = [0xAA_u8; 5];
    let mut writer = <EndianStreamWriter<BE>>::new(&mut data);
    writer.write::<u16>(0x0102);
    assert!(writer.try_write::<u32>(0x03040506).is_err());
    assert!(writer.try_write_bytes(&[0; 4]).is_err());
    assert_eq!(writer.position(), 2);
    writer.skip(1);
    writer.write_bytes(&[7, 8]);
    assert_eq!(writer.remaining(), 0);
    assert_eq!(writer.into_inner(), &[1, 2, 0xAA, 7, 8]);
}

#[test]
#[should_panic]
fn test_with_size_too_large() {
    let mut data = [0_u8; 4];
    let _ = <EndianStreamWriter<LE>>::with_size(&mut data, 5);
}

#[test]
#[should_panic]
fn test_with_size_zero() {
    let mut data = [0_u8; 4];
    let _ = <EndianStreamWriter<BE>>::with_size(&mut data, 0);
}
