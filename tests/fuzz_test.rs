/// Cross-checks the A* solver against a plain breadth-first search on many
/// random grids: a path must be found exactly when the goal is reachable,
/// and since every move costs one unit its cost must equal the BFS distance.
use maze_pathfinding::grid::{Cell, GridMap};
use maze_pathfinding::search::solve;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_map(n: usize, rng: &mut StdRng) -> GridMap {
    let walls: Vec<Vec<bool>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.4)).collect())
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

fn bfs_distance(map: &GridMap) -> Option<u32> {
    let mut dist = vec![vec![None; map.width()]; map.height()];
    dist[map.start().row][map.start().col] = Some(0);
    let mut queue = VecDeque::from([map.start()]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[cell.row][cell.col].unwrap();
        if cell == map.goal() {
            return Some(d);
        }
        for (_, next) in map.neighbors(cell) {
            if dist[next.row][next.col].is_none() {
                dist[next.row][next.col] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn fuzz_cost_matches_bfs() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let map = random_map(N, &mut rng);
        let expected = bfs_distance(&map);
        match solve(&map) {
            Some(result) => {
                assert_eq!(Some(result.total_cost), expected);
                assert_eq!(result.cells.len() as u32, result.total_cost);
                assert_eq!(*result.cells.last().unwrap(), map.goal());
            }
            None => assert_eq!(expected, None),
        }
    }
}

#[test]
fn fuzz_explored_is_reachable() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let map = random_map(N, &mut rng);
        if let Some(result) = solve(&map) {
            // Expanded states were all popped from the frontier, so each one
            // must be passable and carry a recorded cost.
            for cell in &result.explored {
                assert!(map.is_passable(*cell));
                assert!(result.cost_to_reach.contains_key(cell));
            }
            assert!(result.explored_count >= result.total_cost as usize);
        }
    }
}
