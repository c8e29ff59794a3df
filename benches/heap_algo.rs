use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use heap_algo::{make_heap, pop_heap, push_heap, sort_heap};
use rand::prelude::*;
use rand::rngs::StdRng;

const LEN: usize = 10_000;

fn random_input() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..LEN).map(|_| rng.gen()).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let input = random_input();

    c.bench_function("make_heap", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |v| make_heap(black_box(v.as_mut_slice())),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("push_pop", |b| {
        let mut heap = input.clone();
        make_heap(&mut heap);
        let mut rng = rand::thread_rng();
        b.iter(|| {
            heap.push(rng.gen());
            push_heap(&mut heap);
            pop_heap(&mut heap);
            black_box(heap.pop())
        })
    });

    c.bench_function("make_and_sort_heap", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |v| {
                make_heap(v);
                sort_heap(v);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
