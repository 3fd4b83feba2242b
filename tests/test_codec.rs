/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use endian_stream::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_literal_vectors() {
    let mut buffer = [0; 2];
    LE::put::<u16>(0x1234, &mut buffer);
    assert_eq!(buffer, [0x34, 0x12]);
    BE::put::<u16>(0x1234, &mut buffer);
    assert_eq!(buffer, [0x12, 0x34]);

    let mut buffer = [0; 4];
    LE::put::<u32>(0x01020304, &mut buffer);
    assert_eq!(buffer, [0x04, 0x03, 0x02, 0x01]);
    BE::put::<u32>(0x01020304, &mut buffer);
    assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04]);

    let mut buffer = [0; 3];
    LE::put::<U24>(0xABCDEF, &mut buffer);
    assert_eq!(buffer, [0xEF, 0xCD, 0xAB]);
    BE::put::<U24>(0xABCDEF, &mut buffer);
    assert_eq!(buffer, [0xAB, 0xCD, 0xEF]);

    let mut buffer = [0; 1];
    LE::put::<i8>(-1, &mut buffer);
    assert_eq!(buffer, [0xFF]);
    buffer[0] = 0;
    BE::put::<i8>(-1, &mut buffer);
    assert_eq!(buffer, [0xFF]);
}

#[test]
fn test_wide_vectors() {
    let mut buffer = [0; 8];
    BE::put::<U40>(0x01_0203_0405, &mut buffer);
    assert_eq!(&buffer[..5], &[1, 2, 3, 4, 5]);
    LE::put::<U48>(0x0102_0304_0506, &mut buffer);
    assert_eq!(&buffer[..6], &[6, 5, 4, 3, 2, 1]);
    BE::put::<U56>(0x01_0203_0405_0607, &mut buffer);
    assert_eq!(&buffer[..7], &[1, 2, 3, 4, 5, 6, 7]);
    LE::put::<u64>(0x0102_0304_0506_0708, &mut buffer);
    assert_eq!(buffer, [8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(BE::get::<u64>(&buffer), 0x0807_0605_0403_0201);
    assert_eq!(LE::get::<U56>(&buffer), 0x02_0304_0506_0708);
}

fn test_round_trip<E: Endianness, W: Width>(values: &[W::Value]) {
    let mut buffer = [0; 8];
    for &value in values {
        E::put::<W>(value, &mut buffer);
        assert_eq!(
            E::get::<W>(&buffer),
            value,
            "{} {}-endian",
            W::NAME,
            E::NAME
        );
    }
}

fn test_extremes<E: Endianness>() {
    test_round_trip::<E, u8>(&[0, 1, 0x7F, 0x80, u8::MAX]);
    test_round_trip::<E, i8>(&[0, 1, -1, i8::MIN, i8::MAX]);
    test_round_trip::<E, u16>(&[0, 1, 0x1234, u16::MAX]);
    test_round_trip::<E, i16>(&[0, -1, i16::MIN, i16::MAX]);
    test_round_trip::<E, U24>(&[0, 1, 0xABCDEF, (1 << 24) - 1]);
    test_round_trip::<E, u32>(&[0, 1, 0x01020304, u32::MAX]);
    test_round_trip::<E, i32>(&[0, -1, i32::MIN, i32::MAX]);
    test_round_trip::<E, U40>(&[0, 1, (1 << 40) - 1]);
    test_round_trip::<E, U48>(&[0, 1, (1 << 48) - 1]);
    test_round_trip::<E, U56>(&[0, 1, (1 << 56) - 1]);
    test_round_trip::<E, u64>(&[0, 1, u64::MAX]);
    test_round_trip::<E, i64>(&[0, -1, i64::MIN, i64::MAX]);
}

#[test]
fn test_round_trip_extremes() {
    test_extremes::<BE>();
    test_extremes::<LE>();
}

fn test_random<E: Endianness>(r: &mut SmallRng) {
    let mut buffer = [0; 8];
    for _ in 0..1000 {
        let x: u64 = r.random();
        let mask = |bits: u32| x & (u64::MAX >> (64 - bits));

        E::put::<U24>(mask(24) as u32, &mut buffer);
        assert_eq!(E::get::<U24>(&buffer), mask(24) as u32);
        E::put::<U40>(mask(40), &mut buffer);
        assert_eq!(E::get::<U40>(&buffer), mask(40));
        E::put::<U48>(mask(48), &mut buffer);
        assert_eq!(E::get::<U48>(&buffer), mask(48));
        E::put::<U56>(mask(56), &mut buffer);
        assert_eq!(E::get::<U56>(&buffer), mask(56));
        E::put::<i32>(x as i32, &mut buffer);
        assert_eq!(E::get::<i32>(&buffer), x as i32);
        E::put::<i64>(x as i64, &mut buffer);
        assert_eq!(E::get::<i64>(&buffer), x as i64);
    }
}

#[test]
fn test_round_trip_random() {
    let mut r = SmallRng::seed_from_u64(0);
    test_random::<BE>(&mut r);
    test_random::<LE>(&mut r);
}

/// All-ones patterns must survive a get/put cycle unchanged, and signed
/// widths must see them as -1.
fn test_all_ones<E: Endianness>() {
    for n in [1, 2, 3, 4, 5, 6, 7, 8] {
        let ones = [0xFF; 8];
        let mut buffer = [0; 8];
        match n {
            1 => {
                assert_eq!(E::get::<i8>(&ones), -1);
                E::put::<u8>(E::get::<u8>(&ones), &mut buffer);
            }
            2 => {
                assert_eq!(E::get::<i16>(&ones), -1);
                E::put::<u16>(E::get::<u16>(&ones), &mut buffer);
            }
            3 => E::put::<U24>(E::get::<U24>(&ones), &mut buffer),
            4 => {
                assert_eq!(E::get::<i32>(&ones), -1);
                E::put::<i32>(E::get::<i32>(&ones), &mut buffer);
            }
            5 => E::put::<U40>(E::get::<U40>(&ones), &mut buffer),
            6 => E::put::<U48>(E::get::<U48>(&ones), &mut buffer),
            7 => E::put::<U56>(E::get::<U56>(&ones), &mut buffer),
            _ => {
                assert_eq!(E::get::<i64>(&ones), -1);
                E::put::<i64>(E::get::<i64>(&ones), &mut buffer);
            }
        }
        assert!(buffer[..n].iter().all(|&b| b == 0xFF), "{} bytes", n);
        assert!(buffer[n..].iter().all(|&b| b == 0), "{} bytes", n);
    }
    assert_eq!(E::get::<U24>(&[0xFF; 3]), 0x00FF_FFFF);
    assert_eq!(E::get::<U56>(&[0xFF; 7]), 0x00FF_FFFF_FFFF_FFFF);
}

#[test]
fn test_all_ones_patterns() {
    test_all_ones::<BE>();
    test_all_ones::<LE>();
}

#[test]
fn test_mirror_images() {
    let mut r = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        let x: u64 = r.random();
        let mut be = [0; 8];
        let mut le = [0; 8];
        BE::put::<u64>(x, &mut be);
        LE::put::<u64>(x, &mut le);
        assert_eq!(be, x.to_be_bytes());
        assert_eq!(le, x.to_le_bytes());
        le.reverse();
        assert_eq!(be, le);
    }
}

#[test]
#[should_panic]
fn test_get_short_buffer() {
    BE::get::<u32>(&[0; 3]);
}

#[test]
#[should_panic]
fn test_put_short_buffer() {
    LE::put::<U48>(0, &mut [0; 5]);
}
