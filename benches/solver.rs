use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wallbreak::{solve, Grid, SolveResult, MAX_DIM};

/// Largest allowed grid with deterministically scattered obstacles. The top
/// row and right column stay walkable so every generated grid is solvable.
fn obstacle_grid(period: usize) -> Grid {
    let matrix: Vec<Vec<u8>> = (0..MAX_DIM)
        .map(|row| {
            (0..MAX_DIM)
                .map(|col| {
                    let interior = row > 0 && col < MAX_DIM - 1;
                    u8::from(interior && (row * 31 + col * 17) % period == 0)
                })
                .collect()
        })
        .collect();

    Grid::from_matrix(&matrix).unwrap()
}

fn bench_solve_with_period(c: &mut Criterion, period: usize) {
    let grid = obstacle_grid(period);

    c.bench_function(&format!("solve_20x20_period_{}", period), |b| {
        b.iter(|| {
            let result = solve(black_box(&grid));
            assert!(matches!(result, SolveResult::Path(_)));
        })
    });
}

pub fn sparse_obstacles(c: &mut Criterion) {
    bench_solve_with_period(c, 11);
}

pub fn medium_obstacles(c: &mut Criterion) {
    bench_solve_with_period(c, 5);
}

pub fn dense_obstacles(c: &mut Criterion) {
    bench_solve_with_period(c, 3);
}

criterion_group!(benches, sparse_obstacles, medium_obstacles, dense_obstacles);
criterion_main!(benches);
