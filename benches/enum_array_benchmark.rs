use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enum_array::{entry, enum_key, EnumArray, Key};

enum_key! {
    #[derive(Debug)]
    enum Channel { C0, C1, C2, C3, C4, C5, C6, C7 }
}

fn bench_keyed_access(c: &mut Criterion) {
    c.bench_function("enum_array_keyed_read_write", |b| {
        let mut array = EnumArray::<Channel, u64>::from_fn(|k: Channel| k.index() as u64);
        b.iter(|| {
            for &key in Channel::VALUES {
                array[key] = array[key].wrapping_mul(31).wrapping_add(7);
            }
            black_box(array[Channel::C5]);
        });
    });
}

fn bench_safe_init(c: &mut Criterion) {
    c.bench_function("enum_array_safe_init", |b| {
        b.iter(|| {
            let array = EnumArray::<Channel, u64>::builder()
                .with(entry!(Channel::C0, 0))
                .with(entry!(Channel::C1, 1))
                .with(entry!(Channel::C2, 2))
                .with(entry!(Channel::C3, 3))
                .with(entry!(Channel::C4, 4))
                .with(entry!(Channel::C5, 5))
                .with(entry!(Channel::C6, 6))
                .with(entry!(Channel::C7, 7))
                .finish();
            black_box(array);
        });
    });
}

fn bench_from_fn(c: &mut Criterion) {
    c.bench_function("enum_array_from_fn", |b| {
        b.iter(|| {
            let array = EnumArray::<Channel, u64>::from_fn(|k: Channel| k.index() as u64 * 3);
            black_box(array);
        });
    });
}

fn bench_iteration(c: &mut Criterion) {
    c.bench_function("enum_array_iter_sum", |b| {
        let array = EnumArray::<Channel, u64>::from_fn(|k: Channel| k.index() as u64);
        b.iter(|| {
            let sum: u64 = array.iter().sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_keyed_access,
    bench_safe_init,
    bench_from_fn,
    bench_iteration
);
criterion_main!(benches);
