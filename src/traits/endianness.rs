/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Width;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

/// Runtime counterpart of an [`Endianness`] selector, mostly useful for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Marker trait for endianness selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`].
///
/// Besides selecting the byte order of a stream at the type level, the trait
/// carries the two primitives every fixed-width codec is built on:
/// [`get_uint`](Endianness::get_uint) and [`put_uint`](Endianness::put_uint),
/// which move between a `u64` and up to eight bytes using only shifts and
/// masks, so the result never depends on the byte order of the host.
pub trait Endianness:
    private::Endianness + core::fmt::Debug + Clone + Copy + Default + Send + Sync + 'static
{
    /// The name of the endianness.
    const NAME: &'static str;
    /// The runtime tag of the endianness.
    const ORDER: ByteOrder;

    /// Assembles the bytes of `buffer` into an integer.
    ///
    /// The whole buffer is used.
    ///
    /// # Panics
    ///
    /// If `buffer` is longer than eight bytes.
    fn get_uint(buffer: &[u8]) -> u64;

    /// Spreads the lowest `buffer.len()` bytes of `value` over `buffer`.
    ///
    /// Higher bytes of `value` are discarded.
    ///
    /// # Panics
    ///
    /// If `buffer` is longer than eight bytes.
    fn put_uint(value: u64, buffer: &mut [u8]);

    /// Reads a value of width `W` from the start of `buffer`.
    ///
    /// # Panics
    ///
    /// If `buffer` is shorter than [`W::BYTES`](Width::BYTES).
    #[inline(always)]
    fn get<W: Width>(buffer: &[u8]) -> W::Value {
        W::get::<Self>(buffer)
    }

    /// Writes `value` with width `W` at the start of `buffer`.
    ///
    /// # Panics
    ///
    /// If `buffer` is shorter than [`W::BYTES`](Width::BYTES).
    #[inline(always)]
    fn put<W: Width>(value: W::Value, buffer: &mut [u8]) {
        W::put::<Self>(value, buffer)
    }
}

#[inline(always)]
fn check_word_len(len: usize) {
    assert!(len <= 8, "Cannot access {} bytes as a single word", len);
}

/// Selector type for little-endian streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct LittleEndian;

/// Selector type for big-endian streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct BigEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

impl private::Endianness for LittleEndian {}
impl private::Endianness for BigEndian {}

impl Endianness for LittleEndian {
    const NAME: &'static str = "little";
    const ORDER: ByteOrder = ByteOrder::Little;

    #[inline(always)]
    fn get_uint(buffer: &[u8]) -> u64 {
        check_word_len(buffer.len());
        buffer
            .iter()
            .rev()
            .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
    }

    #[inline(always)]
    fn put_uint(value: u64, buffer: &mut [u8]) {
        check_word_len(buffer.len());
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = (value >> (8 * i) & 0xFF) as u8;
        }
    }
}

impl Endianness for BigEndian {
    const NAME: &'static str = "big";
    const ORDER: ByteOrder = ByteOrder::Big;

    #[inline(always)]
    fn get_uint(buffer: &[u8]) -> u64 {
        check_word_len(buffer.len());
        buffer
            .iter()
            .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
    }

    #[inline(always)]
    fn put_uint(value: u64, buffer: &mut [u8]) {
        check_word_len(buffer.len());
        let last = buffer.len().saturating_sub(1);
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = (value >> (8 * (last - i)) & 0xFF) as u8;
        }
    }
}
