//! Benchmarks for digit ring operations

extern crate criterion;
extern crate digitring;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digitring::{DigitList, Radix, SUPPORTED_RADIXES};

mod common;
use common::*;

criterion_main!(
    codec,
    container,
);

criterion_group!(
    name = codec;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(200);
    targets =
        bench_from_decimal_str,
        bench_to_decimal_string,
        bench_multiply_pairwise,
);

criterion_group!(
    name = container;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_positional_access,
        bench_insert_middle,
        bench_rotate,
);


fn bench_from_decimal_str(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(0x3404);
    let text = random_decimal_string(&mut rng, 400);

    let mut group = c.benchmark_group("from_decimal_str");
    for radix in SUPPORTED_RADIXES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(radix), radix, |b, &radix| {
            b.iter(|| DigitList::from_decimal_str_in(radix, black_box(&text)))
        });
    }
    group.finish();
}

fn bench_to_decimal_string(c: &mut Criterion) {
    let lists = random_digit_lists(7, Radix::Ternary, 16, 300);
    c.bench_function("to_decimal_string", |b| {
        b.iter(|| {
            for list in lists.iter() {
                black_box(list.to_decimal_string());
            }
        })
    });
}

fn bench_multiply_pairwise(c: &mut Criterion) {
    let lists = random_digit_lists(11, Radix::Hexadecimal, 12, 120);
    let pairs = make_random_pairs(&lists, 42);
    c.bench_function("multiply_pairwise", |b| {
        b.iter(|| {
            for &(x, y) in pairs.iter() {
                black_box(x * y);
            }
        })
    });
}

fn bench_positional_access(c: &mut Criterion) {
    let list = random_digit_lists(3, Radix::Decimal, 1, 2000).remove(0);
    let len = list.len();
    c.bench_function("get_every_index", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for i in 0..len {
                sum += u32::from(list.get(black_box(i)).unwrap_or_default());
            }
            sum
        })
    });
}

fn bench_insert_middle(c: &mut Criterion) {
    let list = random_digit_lists(5, Radix::Octal, 1, 500).remove(0);
    c.bench_function("insert_middle", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                for i in 0..100 {
                    let mid = list.len() / 2;
                    list.insert(mid, (i % 8) as u8).unwrap();
                }
                list
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut list = random_digit_lists(9, Radix::Binary, 1, 200).remove(0);
    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            list.shift_left();
            list.shift_right();
        })
    });
}
