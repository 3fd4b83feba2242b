/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;
use num_traits::{NumCast, PrimInt};

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum FuzzWidth {
    U8,
    I8,
    U16,
    I16,
    U24,
    U32,
    I32,
    U40,
    U48,
    U56,
    U64,
    I64,
}

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    big_endian: bool,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    GetPosition,
    SetPosition(usize),
    Read(FuzzWidth),
    Write(FuzzWidth, u64),
    ReadBytes(u8),
    WriteBytes(Vec<u8>),
}

macro_rules! with_width {
    ($width:expr, $func:ident::<$e:ty>($($args:expr),*)) => {
        match $width {
            FuzzWidth::U8 => $func::<$e, u8>($($args),*),
            FuzzWidth::I8 => $func::<$e, i8>($($args),*),
            FuzzWidth::U16 => $func::<$e, u16>($($args),*),
            FuzzWidth::I16 => $func::<$e, i16>($($args),*),
            FuzzWidth::U24 => $func::<$e, U24>($($args),*),
            FuzzWidth::U32 => $func::<$e, u32>($($args),*),
            FuzzWidth::I32 => $func::<$e, i32>($($args),*),
            FuzzWidth::U40 => $func::<$e, U40>($($args),*),
            FuzzWidth::U48 => $func::<$e, U48>($($args),*),
            FuzzWidth::U56 => $func::<$e, U56>($($args),*),
            FuzzWidth::U64 => $func::<$e, u64>($($args),*),
            FuzzWidth::I64 => $func::<$e, i64>($($args),*),
        }
    };
}

/// The bit pattern of a host value, sign-extended to 64 bits.
fn to_bits<V: PrimInt>(value: V) -> u64 {
    match value.to_u64() {
        Some(bits) => bits,
        None => value.to_i64().unwrap() as u64,
    }
}

/// Extends the lowest `bits` bits of `raw` as the codec is expected to.
fn extend(raw: u64, bits: usize, signed: bool) -> u64 {
    if bits == 64 {
        raw
    } else if signed && raw >> (bits - 1) & 1 == 1 {
        raw | (!0 << bits)
    } else {
        raw & ((1 << bits) - 1)
    }
}

/// The bytes of the lowest `n` bytes of `value`, built with the standard
/// library conversions.
fn model_bytes<E: Endianness>(value: u64, n: usize) -> Vec<u8> {
    match E::ORDER {
        ByteOrder::Big => value.to_be_bytes()[8 - n..].to_vec(),
        ByteOrder::Little => value.to_le_bytes()[..n].to_vec(),
    }
}

fn model_value<E: Endianness>(bytes: &[u8]) -> u64 {
    let mut word = [0; 8];
    match E::ORDER {
        ByteOrder::Big => {
            word[8 - bytes.len()..].copy_from_slice(bytes);
            u64::from_be_bytes(word)
        }
        ByteOrder::Little => {
            word[..bytes.len()].copy_from_slice(bytes);
            u64::from_le_bytes(word)
        }
    }
}

fn read<E: Endianness, W: Width>(buffer: &[u8], pos: &mut usize) -> Result<u64, StreamError> {
    let mut reader = <EndianStreamReader<E>>::new(buffer);
    reader.seek(*pos);
    let res = reader.try_read::<W>().map(to_bits);
    *pos = reader.position();
    res
}

fn write<E: Endianness, W: Width>(
    buffer: &mut [u8],
    pos: &mut usize,
    value: u64,
) -> Result<(), StreamError> {
    let value = extend(value, W::BITS, W::SIGNED);
    let value: W::Value = if W::SIGNED {
        NumCast::from(value as i64).unwrap()
    } else {
        NumCast::from(value).unwrap()
    };
    let mut writer = <EndianStreamWriter<E>>::new(buffer);
    writer.seek(*pos);
    let res = writer.try_write::<W>(value);
    *pos = writer.position();
    res
}

fn width_info<E: Endianness, W: Width>() -> (usize, bool) {
    (W::BITS, W::SIGNED)
}

pub fn harness(data: FuzzCase) {
    if data.init.is_empty() {
        return;
    }
    if data.big_endian {
        run::<BE>(data)
    } else {
        run::<LE>(data)
    }
}

fn run<E: Endianness>(data: FuzzCase) {
    let size = data.init.len();
    let mut buffer = data.init.clone();
    let mut model = data.init;
    let mut pos = 0;

    for command in data.commands {
        match command {
            RandomCommand::GetPosition => {
                let mut reader = <EndianStreamReader<E>>::new(&buffer);
                reader.seek(pos);
                assert_eq!(reader.position(), pos);
                assert_eq!(reader.remaining(), size - pos);
            }
            RandomCommand::SetPosition(new_pos) => {
                let mut reader = <EndianStreamReader<E>>::new(&buffer);
                let res = reader.try_seek(new_pos);
                assert_eq!(res.is_ok(), new_pos <= size);
                if res.is_ok() {
                    pos = new_pos;
                }
            }
            RandomCommand::Read(width) => {
                let (bits, signed) = with_width!(width, width_info::<E>());
                let n = bits / 8;
                let old_pos = pos;
                let res = with_width!(width, read::<E>(&buffer, &mut pos));
                if old_pos + n <= size {
                    let raw = model_value::<E>(&model[old_pos..old_pos + n]);
                    assert_eq!(res, Ok(extend(raw, bits, signed)));
                    assert_eq!(pos, old_pos + n);
                } else {
                    assert!(res.is_err());
                    assert_eq!(pos, old_pos);
                }
            }
            RandomCommand::Write(width, value) => {
                let (bits, _) = with_width!(width, width_info::<E>());
                let n = bits / 8;
                let old_pos = pos;
                let res = with_width!(width, write::<E>(&mut buffer, &mut pos, value));
                if old_pos + n <= size {
                    assert!(res.is_ok());
                    model[old_pos..old_pos + n].copy_from_slice(&model_bytes::<E>(value, n));
                    assert_eq!(pos, old_pos + n);
                } else {
                    assert!(res.is_err());
                    assert_eq!(pos, old_pos);
                }
            }
            RandomCommand::ReadBytes(len) => {
                let len = len as usize;
                let mut dest = vec![0; len];
                let mut reader = <EndianStreamReader<E>>::new(&buffer);
                reader.seek(pos);
                let res = reader.try_read_bytes(&mut dest);
                if pos + len <= size {
                    assert!(res.is_ok());
                    assert_eq!(dest, model[pos..pos + len]);
                    pos += len;
                } else {
                    assert!(res.is_err());
                }
                assert_eq!(reader.position(), pos);
            }
            RandomCommand::WriteBytes(bytes) => {
                let mut writer = <EndianStreamWriter<E>>::new(&mut buffer);
                writer.seek(pos);
                let res = writer.try_write_bytes(&bytes);
                if pos + bytes.len() <= size {
                    assert!(res.is_ok());
                    model[pos..pos + bytes.len()].copy_from_slice(&bytes);
                    pos += bytes.len();
                } else {
                    assert!(res.is_err());
                }
                assert_eq!(writer.position(), pos);
            }
        }
    }

    assert_eq!(buffer, model);
}
