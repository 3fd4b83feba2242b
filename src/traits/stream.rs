/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Endianness, Width};

/// The only error of a stream: an access that does not fit in the buffer.
///
/// It is returned by the `try_` methods of [`EndianRead`], [`EndianWrite`]
/// and [`EndianSeek`]; the other methods panic with its message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamError {
    /// `requested` bytes were needed at `position`, but the stream has only
    /// `size` bytes. For seeks, `requested` is zero and `position` is the
    /// target.
    OutOfBounds {
        position: usize,
        requested: usize,
        size: usize,
    },
}

impl core::error::Error for StreamError {}
impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::OutOfBounds {
                position,
                requested,
                size,
            } => write!(
                f,
                "Out of bounds access of {} bytes at position {} in a stream of {} bytes",
                requested, position, size
            ),
        }
    }
}

/// Checks that `requested` bytes are available at `position` in a stream of
/// `size` bytes.
#[inline(always)]
pub(crate) fn check_bounds(
    position: usize,
    requested: usize,
    size: usize,
) -> Result<(), StreamError> {
    match position.checked_add(requested) {
        Some(end) if end <= size => Ok(()),
        _ => Err(StreamError::OutOfBounds {
            position,
            requested,
            size,
        }),
    }
}

/// Position and size of a fixed-size stream.
///
/// The position is always between zero and [`size`](EndianSeek::size),
/// inclusive.
pub trait EndianSeek {
    /// The size of the underlying buffer in bytes. It never changes.
    fn size(&self) -> usize;

    /// The current position in bytes from the start of the buffer.
    fn position(&self) -> usize;

    /// Set the current position, failing if it is beyond the end of the
    /// buffer. On failure, the position is unchanged.
    fn try_seek(&mut self, position: usize) -> Result<(), StreamError>;

    /// Set the current position.
    ///
    /// # Panics
    ///
    /// If `position` is greater than [`size`](EndianSeek::size).
    #[inline]
    fn seek(&mut self, position: usize) {
        if let Err(e) = self.try_seek(position) {
            panic!("{}", e);
        }
    }

    /// The number of bytes between the current position and the end.
    #[inline(always)]
    fn remaining(&self) -> usize {
        self.size() - self.position()
    }
}

/// Sequential reads of fixed-width integers in byte order `E`.
pub trait EndianRead<E: Endianness>: EndianSeek {
    /// Decode a value of width `W` and advance the position by
    /// [`W::BYTES`](Width::BYTES). On failure, the position is unchanged.
    fn try_read<W: Width>(&mut self) -> Result<W::Value, StreamError>;

    /// Copy `dest.len()` bytes verbatim into `dest` and advance the position
    /// accordingly. On failure, the position is unchanged.
    fn try_read_bytes(&mut self, dest: &mut [u8]) -> Result<(), StreamError>;

    /// Decode a value of width `W` and advance the position.
    ///
    /// # Panics
    ///
    /// If fewer than [`W::BYTES`](Width::BYTES) bytes remain.
    #[inline]
    fn read<W: Width>(&mut self) -> W::Value {
        match self.try_read::<W>() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Copy `dest.len()` bytes verbatim into `dest` and advance the position.
    ///
    /// # Panics
    ///
    /// If fewer than `dest.len()` bytes remain.
    #[inline]
    fn read_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_read_bytes(dest) {
            panic!("{}", e);
        }
    }
}

/// Sequential writes of fixed-width integers in byte order `E`.
pub trait EndianWrite<E: Endianness>: EndianSeek {
    /// Encode `value` with width `W` and advance the position by
    /// [`W::BYTES`](Width::BYTES). On failure, the position and the buffer
    /// are unchanged.
    fn try_write<W: Width>(&mut self, value: W::Value) -> Result<(), StreamError>;

    /// Copy `src` verbatim and advance the position by `src.len()`. On
    /// failure, the position and the buffer are unchanged.
    fn try_write_bytes(&mut self, src: &[u8]) -> Result<(), StreamError>;

    /// Encode `value` with width `W` and advance the position.
    ///
    /// # Panics
    ///
    /// If fewer than [`W::BYTES`](Width::BYTES) bytes remain.
    #[inline]
    fn write<W: Width>(&mut self, value: W::Value) {
        if let Err(e) = self.try_write::<W>(value) {
            panic!("{}", e);
        }
    }

    /// Copy `src` verbatim and advance the position.
    ///
    /// # Panics
    ///
    /// If fewer than `src.len()` bytes remain.
    #[inline]
    fn write_bytes(&mut self, src: &[u8]) {
        if let Err(e) = self.try_write_bytes(src) {
            panic!("{}", e);
        }
    }
}
