use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::grid::{Cell, GridMap};
use maze_pathfinding::search::solve;
use rand::prelude::*;
use std::hint::black_box;

fn random_map(n: usize, rng: &mut StdRng) -> GridMap {
    let walls: Vec<Vec<bool>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.25)).collect())
        .collect();
    let start = Cell::new(0, 0);
    let goal = Cell::new(n - 1, n - 1);
    GridMap::new(
        n,
        n,
        |cell| cell != start && cell != goal && walls[cell.row][cell.col],
        start,
        goal,
    )
    .unwrap()
}

fn solve_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 64] {
        let maps: Vec<GridMap> = (0..32).map(|_| random_map(n, &mut rng)).collect();
        c.bench_function(format!("solve {n}x{n}").as_str(), |b| {
            b.iter(|| {
                for map in &maps {
                    black_box(solve(map));
                }
            })
        });
    }
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
