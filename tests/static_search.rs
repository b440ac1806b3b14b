mod common;

use common::*;
use dynamic_search::algorithms::{AlgorithmKind, BidirectionalSearch, DepthLimitedSearch, IterativeDeepeningDfs};
use dynamic_search::environment::Environment;
use dynamic_search::grid::Grid;
use dynamic_search::SearchAlgorithm;

const LAYOUTS: [&[(i32, i32)]; 4] = [
    &[],
    &[(1, 0), (1, 1), (1, 2), (1, 3)],
    &[(3, 4), (3, 3), (3, 2), (3, 1), (1, 0), (1, 1), (1, 2)],
    &[(2, 1), (2, 2), (2, 3), (1, 2), (3, 2)],
];

fn static_grids() -> Vec<Grid> {
    let mut grids: Vec<Grid> = LAYOUTS.iter().map(|walls| walled_grid(5, walls)).collect();
    for seed in 0..12u64 {
        let size = 5 + (seed % 6) as i32;
        grids.push(random_grid(size, (size * size / 4) as usize, seed));
    }
    grids
}

#[test]
fn found_paths_are_well_formed_and_unblocked() {
    for grid in static_grids() {
        if oracle_moves(&grid).is_none() {
            continue;
        }
        for kind in AlgorithmKind::ALL {
            let mut env = grid.clone();
            let result = run(kind, &mut env, 200);
            if !result.found {
                // Only depth-limited search may legitimately give up on a
                // reachable target.
                assert_eq!(kind, AlgorithmKind::Dls);
                continue;
            }
            assert_well_formed(&result, grid.start(), grid.target());
            for pos in &result.path {
                assert!(!grid.is_blocked(*pos), "{} walked through {:?}", kind, pos);
            }
            assert_eq!(result.total_nodes_explored, result.explored.len());
        }
    }
}

#[test]
fn bfs_matches_brute_force_shortest_path() {
    for grid in static_grids() {
        let mut env = grid.clone();
        let result = run(AlgorithmKind::Bfs, &mut env, 0);
        assert_eq!(result.path_cost(), oracle_moves(&grid));
    }
}

#[test]
fn ucs_is_never_beaten_by_another_engine() {
    for grid in static_grids() {
        let Some(optimal) = oracle_moves(&grid) else {
            continue;
        };
        let ucs = run(AlgorithmKind::Ucs, &mut grid.clone(), 0);
        let ucs_cost = ucs.path_cost().unwrap();
        assert_eq!(ucs_cost, optimal);

        for kind in AlgorithmKind::ALL {
            if let Some(cost) = run(kind, &mut grid.clone(), 200).path_cost() {
                assert!(ucs_cost <= cost, "{} found {} moves, ucs {}", kind, cost, ucs_cost);
            }
        }
    }
}

#[test]
fn iddfs_first_success_matches_bfs_length() {
    for grid in static_grids() {
        let bfs = run(AlgorithmKind::Bfs, &mut grid.clone(), 0);
        let mut iddfs = IterativeDeepeningDfs::new();
        let result = iddfs.search(&mut grid.clone());

        assert_eq!(result.found, bfs.found);
        assert_eq!(result.path_cost(), bfs.path_cost());
        if let Some(moves) = bfs.path_cost() {
            assert_eq!(iddfs.iterations(), moves.max(1));
        }
    }
}

#[test]
fn iddfs_exhausts_its_limit_when_target_is_walled_in() {
    let grid = walled_grid(5, &[(3, 3), (4, 3), (3, 4)]);
    let mut iddfs = IterativeDeepeningDfs::new();
    let result = iddfs.search(&mut grid.clone());

    assert!(!result.found);
    assert!(result.path.is_empty());
    assert_eq!(iddfs.iterations(), 10);
}

#[test]
fn walled_in_target_is_not_found_by_anyone() {
    let grid = walled_grid(5, &[(3, 3), (4, 3), (3, 4)]);
    for kind in AlgorithmKind::ALL {
        let result = run(kind, &mut grid.clone(), 50);
        assert!(!result.found, "{} claimed a path", kind);
        assert!(result.path.is_empty());
        assert!(result.explored.contains(&grid.start()));
    }
}

#[test]
fn dls_limit_zero_only_finds_a_target_on_the_start() {
    let mut same = open_grid(3, 3, p(1, 1), p(1, 1));
    let result = DepthLimitedSearch::new(0).search(&mut same);
    assert!(result.found);
    assert_eq!(result.path, vec![p(1, 1)]);

    let mut apart = open_grid(3, 3, p(0, 0), p(1, 0));
    let result = DepthLimitedSearch::new(0).search(&mut apart);
    assert!(!result.found);
    assert_eq!(result.explored.len(), 1);
}

#[test]
fn dls_gives_up_below_the_shortest_path() {
    let grid = open_grid(10, 10, p(0, 0), p(9, 9));
    for limit in 0..9 {
        let result = DepthLimitedSearch::new(limit).search(&mut grid.clone());
        assert!(!result.found, "limit {} reached a target 9 moves away", limit);
    }
}

#[test]
fn dls_finds_a_target_exactly_at_the_limit() {
    let grid = open_grid(5, 1, p(0, 0), p(4, 0));

    let result = DepthLimitedSearch::new(4).search(&mut grid.clone());
    assert!(result.found);
    assert_eq!(result.path_cost(), Some(4));

    let result = DepthLimitedSearch::new(3).search(&mut grid.clone());
    assert!(!result.found);
}

#[test]
fn dfs_expands_first_listed_neighbor_first() {
    let mut grid = open_grid(4, 4, p(0, 0), p(3, 0));
    let result = run(AlgorithmKind::Dfs, &mut grid, 0);
    // East is the first in-bounds neighbor of every cell on the top row.
    assert_eq!(result.path, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    assert_eq!(result.frontier_history.len(), 4);
}

#[test]
fn frontier_history_starts_with_the_start() {
    for kind in [AlgorithmKind::Bfs, AlgorithmKind::Dfs, AlgorithmKind::Ucs, AlgorithmKind::Dls] {
        let grid = walled_grid(5, LAYOUTS[1]);
        let result = run(kind, &mut grid.clone(), 20);
        let first = &result.frontier_history[0];
        assert_eq!(first.len(), 1);
        assert!(first.contains(&grid.start()));
    }
}

#[test]
fn bidirectional_meets_in_the_middle() {
    let mut grid = open_grid(5, 5, p(0, 0), p(4, 4));
    let mut search = BidirectionalSearch::new();
    let result = search.search(&mut grid);

    assert_well_formed(&result, p(0, 0), p(4, 4));
    let meeting = search.meeting_point().unwrap();
    let index = result.path.iter().position(|pos| *pos == meeting).unwrap();
    let forward = index;
    let backward = result.path.len() - 1 - index;
    assert!(forward.abs_diff(backward) <= 1, "forward {} backward {}", forward, backward);

    let mut seen = rustc_hash::FxHashSet::default();
    assert!(result.path.iter().all(|pos| seen.insert(*pos)), "path repeats a cell");
}

#[test]
fn bidirectional_with_start_on_target() {
    let mut grid = open_grid(4, 4, p(2, 2), p(2, 2));
    let result = BidirectionalSearch::new().search(&mut grid);
    assert!(result.found);
    assert_eq!(result.path, vec![p(2, 2)]);
}

#[test]
fn fresh_instances_on_identical_grids_agree() {
    for seed in [1u64, 5, 9] {
        for kind in AlgorithmKind::ALL {
            let mut a = random_grid(9, 20, seed);
            let mut b = random_grid(9, 20, seed);
            let first = run(kind, &mut a, 30);
            let second = run(kind, &mut b, 30);
            assert_eq!(first.path, second.path, "{} diverged on seed {}", kind, seed);
            assert_eq!(first.explored.len(), second.explored.len());
            assert!(first.dynamic_obstacles_encountered.is_empty());
        }
    }
}
