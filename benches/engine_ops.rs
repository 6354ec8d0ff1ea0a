use criterion::{criterion_group, criterion_main, Criterion};
use merge_2048::{evaluate, Direction, Grid};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn corpus(size: usize) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grids = Vec::new();
    grids.push(Grid::empty(size));
    let mut g = Grid::initialize(size, 2, 0.9, &mut rng);
    grids.push(g.clone());
    // Derive a variety of densities deterministically.
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for i in 0..40 {
        let dir = seq[i % seq.len()];
        let out = g.shift(dir);
        if out.grid != g {
            g = out.grid.with_random_tile(&mut rng, 0.9);
        }
        grids.push(g.clone());
    }
    grids
}

fn bench_shift(c: &mut Criterion) {
    for size in [4usize, 8] {
        let grids = corpus(size);
        for dir in Direction::ALL {
            c.bench_function(&format!("shift/{dir:?}/{size}x{size}"), |b| {
                b.iter(|| {
                    let mut acc = 0u32;
                    for g in &grids {
                        acc ^= g.shift(dir).points;
                    }
                    black_box(acc)
                })
            });
        }
    }
}

fn bench_rotate(c: &mut Criterion) {
    let grids = corpus(4);
    c.bench_function("rotate_clockwise/4x4", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for g in &grids {
                acc ^= g.rotate_clockwise().highest_tile();
            }
            black_box(acc)
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let grids = corpus(4);
    c.bench_function("evaluate/4x4", |b| {
        b.iter(|| {
            let mut over = 0u32;
            for g in &grids {
                if evaluate(g, 2048, false).is_over {
                    over += 1;
                }
            }
            black_box(over)
        })
    });
}

criterion_group!(benches, bench_shift, bench_rotate, bench_evaluate);
criterion_main!(benches);
