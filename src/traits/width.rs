/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Debug, Display, LowerHex};

use num_traits::PrimInt;

use super::Endianness;

/// A fixed-width integer field.
///
/// Implementors describe the width (in bits and bytes) and signedness of a
/// field, and the host type [`Width::Value`] it is decoded into. The native
/// integer types are their own host type; the non-power-of-two widths
/// [`U24`], [`U40`], [`U48`] and [`U56`] are marker types decoded into the
/// smallest native container (`u32` up to 32 bits, `u64` above).
///
/// Signed widths delegate to the unsigned width of the same size and
/// reinterpret the bit pattern, so [`get`](Width::get) sign-extends and
/// [`put`](Width::put) writes the two's complement representation.
///
/// [`put`](Width::put) truncates the value to the declared width; with the
/// `checks` feature enabled, it panics instead if the value does not fit.
///
/// # Examples
/// ```
/// use endian_stream::prelude::*;
///
/// let mut buffer = [0; 3];
/// U24::put::<LE>(0xABCDEF, &mut buffer);
/// assert_eq!(buffer, [0xEF, 0xCD, 0xAB]);
/// assert_eq!(U24::get::<BE>(&buffer), 0xEFCDAB);
///
/// // a single byte reads the same in both orders
/// i8::put::<BE>(-1, &mut buffer);
/// assert_eq!(buffer[0], 0xFF);
/// assert_eq!(i8::get::<LE>(&buffer), -1);
/// ```
pub trait Width {
    /// The host type values of this width are decoded into.
    type Value: PrimInt + Debug + Display + LowerHex + Send + Sync + 'static;
    /// The number of bits of the field.
    const BITS: usize;
    /// The number of bytes of the field.
    const BYTES: usize = Self::BITS / 8;
    /// Whether values are sign-extended when decoded.
    const SIGNED: bool;
    /// A short name for diagnostics.
    const NAME: &'static str;

    /// Reads exactly [`BYTES`](Width::BYTES) bytes from the start of `buffer`.
    ///
    /// # Panics
    ///
    /// If `buffer` is shorter than [`BYTES`](Width::BYTES).
    fn get<E: Endianness>(buffer: &[u8]) -> Self::Value;

    /// Writes exactly [`BYTES`](Width::BYTES) bytes at the start of `buffer`,
    /// leaving the rest untouched.
    ///
    /// # Panics
    ///
    /// If `buffer` is shorter than [`BYTES`](Width::BYTES).
    fn put<E: Endianness>(value: Self::Value, buffer: &mut [u8]);
}

/// Unsigned 24-bit width, decoded into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U24;

/// Unsigned 40-bit width, decoded into a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U40;

/// Unsigned 48-bit width, decoded into a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U48;

/// Unsigned 56-bit width, decoded into a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U56;

#[inline(always)]
fn check_len<W: Width>(len: usize) {
    assert!(
        len >= W::BYTES,
        "Cannot access a {} ({} bytes) in a buffer of {} bytes",
        W::NAME,
        W::BYTES,
        len
    );
}

macro_rules! impl_unsigned {
    ($($width:ty => $value:ty, $bits:literal, $name:literal);* $(;)?) => {$(
        impl Width for $width {
            type Value = $value;
            const BITS: usize = $bits;
            const SIGNED: bool = false;
            const NAME: &'static str = $name;

            #[inline(always)]
            fn get<E: Endianness>(buffer: &[u8]) -> $value {
                check_len::<Self>(buffer.len());
                E::get_uint(&buffer[..Self::BYTES]) as $value
            }

            #[inline(always)]
            fn put<E: Endianness>(value: $value, buffer: &mut [u8]) {
                check_len::<Self>(buffer.len());
                #[cfg(feature = "checks")]
                assert!(
                    (value as u64).checked_shr($bits).unwrap_or(0) == 0,
                    "Value {} does not fit in a {}",
                    value,
                    $name
                );
                E::put_uint(value as u64, &mut buffer[..Self::BYTES]);
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($width:ty => $unsigned:ty, $name:literal);* $(;)?) => {$(
        impl Width for $width {
            type Value = $width;
            const BITS: usize = <$unsigned as Width>::BITS;
            const SIGNED: bool = true;
            const NAME: &'static str = $name;

            #[inline(always)]
            fn get<E: Endianness>(buffer: &[u8]) -> $width {
                <$unsigned as Width>::get::<E>(buffer) as $width
            }

            #[inline(always)]
            fn put<E: Endianness>(value: $width, buffer: &mut [u8]) {
                <$unsigned as Width>::put::<E>(value as $unsigned, buffer)
            }
        }
    )*};
}

impl_unsigned! {
    u8 => u8, 8, "u8";
    u16 => u16, 16, "u16";
    U24 => u32, 24, "u24";
    u32 => u32, 32, "u32";
    U40 => u64, 40, "u40";
    U48 => u64, 48, "u48";
    U56 => u64, 56, "u56";
    u64 => u64, 64, "u64";
}

impl_signed! {
    i8 => u8, "i8";
    i16 => u16, "i16";
    i32 => u32, "i32";
    i64 => u64, "i64";
}
