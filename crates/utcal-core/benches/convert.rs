use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use utcal_core::{from_epoch_seconds, to_epoch_seconds};

fn bench_convert(c: &mut Criterion) {
    // Present-day instant: the decoder walks ~55 years of the linear search
    let now = 1_756_000_000_i64;

    c.bench_function("decode_present_day", |b| {
        b.iter(|| from_epoch_seconds(black_box(now)).unwrap())
    });

    let t = from_epoch_seconds(now).unwrap();
    c.bench_function("encode_present_day", |b| {
        b.iter(|| to_epoch_seconds(black_box(&t)))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
