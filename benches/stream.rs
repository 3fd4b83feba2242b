/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion};
use endian_stream::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

pub const N: usize = 1 << 16;

fn bench_width<E: Endianness, W: Width>(c: &mut Criterion, values: &[u64])
where
    W::Value: TryFrom<u64>,
{
    let values = values
        .iter()
        .map(|&x| {
            let masked = x & (u64::MAX >> (64 - W::BITS));
            <W::Value as TryFrom<u64>>::try_from(masked).ok().unwrap()
        })
        .collect::<Vec<_>>();
    let mut data = vec![0_u8; values.len() * W::BYTES];

    c.bench_function(&format!("write<{}, {}>", W::NAME, E::NAME), |b| {
        b.iter(|| {
            let mut writer = <EndianStreamWriter<E>>::new(&mut data);
            for &value in &values {
                writer.write::<W>(black_box(value));
            }
            black_box(writer.position())
        })
    });

    c.bench_function(&format!("read<{}, {}>", W::NAME, E::NAME), |b| {
        b.iter(|| {
            let mut reader = <EndianStreamReader<E>>::new(&data);
            for _ in 0..values.len() {
                black_box(reader.read::<W>());
            }
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let values = (0..N).map(|_| r.random::<u64>()).collect::<Vec<_>>();

    bench_width::<BE, u16>(c, &values);
    bench_width::<LE, u16>(c, &values);
    bench_width::<BE, U24>(c, &values);
    bench_width::<LE, U24>(c, &values);
    bench_width::<BE, u32>(c, &values);
    bench_width::<LE, u32>(c, &values);
    bench_width::<BE, U48>(c, &values);
    bench_width::<LE, U48>(c, &values);
    bench_width::<BE, u64>(c, &values);
    bench_width::<LE, u64>(c, &values);
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
