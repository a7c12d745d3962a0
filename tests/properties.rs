/// Property-based tests for the grid and union-find invariants.
use percolation::{Percolation, UnionFind};
use proptest::prelude::*;

fn sites(n: usize, max_len: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((1..=n, 1..=n), 0..=max_len)
}

fn grid_and_sites() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=8).prop_flat_map(|n| (Just(n), sites(n, 3 * n * n)))
}

/// Property: a fresh grid is closed everywhere and does not percolate
#[test]
fn prop_fresh_grid_is_closed() {
    proptest!(|(n in 1usize..=12)| {
        let mut p = Percolation::new(n).unwrap();
        prop_assert!(!p.percolates());
        for row in 1..=n {
            for col in 1..=n {
                prop_assert_eq!(p.is_open(row, col), Ok(false));
            }
        }
    });
}

/// Property: opening the same site twice equals opening it once
#[test]
fn prop_open_is_idempotent() {
    proptest!(|((n, opened) in grid_and_sites())| {
        let mut once = Percolation::new(n).unwrap();
        let mut twice = Percolation::new(n).unwrap();
        for &(row, col) in opened.iter() {
            once.open(row, col).unwrap();
            twice.open(row, col).unwrap();
            twice.open(row, col).unwrap();
        }
        prop_assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
        prop_assert_eq!(once.percolates(), twice.percolates());
        for row in 1..=n {
            for col in 1..=n {
                prop_assert_eq!(once.is_open(row, col), twice.is_open(row, col));
                prop_assert_eq!(once.is_full(row, col), twice.is_full(row, col));
            }
        }
    });
}

/// Property: once the grid percolates it keeps percolating
#[test]
fn prop_percolation_is_monotonic() {
    proptest!(|((n, opened) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        let mut seen = false;
        for &(row, col) in opened.iter() {
            p.open(row, col).unwrap();
            let now = p.percolates();
            prop_assert!(!seen || now);
            seen = now;
        }
    });
}

/// Property: full sites are open
#[test]
fn prop_full_implies_open() {
    proptest!(|((n, opened) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        for &(row, col) in opened.iter() {
            p.open(row, col).unwrap();
        }
        for row in 1..=n {
            for col in 1..=n {
                if p.is_full(row, col).unwrap() {
                    prop_assert!(p.is_open(row, col).unwrap());
                }
            }
        }
    });
}

/// Flood fill from the open top-row sites through open 4-neighbours.
fn flood(n: usize, opened: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut open = vec![vec![false; n + 2]; n + 2];
    for &(row, col) in opened {
        open[row][col] = true;
    }
    let mut full = vec![vec![false; n + 2]; n + 2];
    let mut stack: Vec<_> = (1..=n).filter(|&c| open[1][c]).map(|c| (1, c)).collect();
    while let Some((row, col)) = stack.pop() {
        if full[row][col] {
            continue;
        }
        full[row][col] = true;
        for &(r, c) in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)].iter() {
            if open[r][c] && !full[r][c] {
                stack.push((r, c));
            }
        }
    }
    full
}

/// Property: fullness and percolation agree with a direct flood fill (no backwash)
#[test]
fn prop_matches_flood_fill() {
    proptest!(|((n, opened) in grid_and_sites())| {
        let mut p = Percolation::new(n).unwrap();
        for &(row, col) in opened.iter() {
            p.open(row, col).unwrap();
        }
        let full = flood(n, &opened);
        for row in 1..=n {
            for col in 1..=n {
                prop_assert_eq!(p.is_full(row, col).unwrap(), full[row][col],
                    "site ({}, {}) on a {}x{} grid", row, col, n, n);
            }
        }
        let reaches_bottom = (1..=n).any(|col| full[n][col]);
        prop_assert_eq!(p.percolates(), reaches_bottom);
    });
}

/// Property: connectivity is reflexive, symmetric and transitive
#[test]
fn prop_union_find_is_an_equivalence() {
    proptest!(|(
        m in 1usize..25,
        pairs in prop::collection::vec((0usize..25, 0usize..25), 0..40)
    )| {
        let mut uf = UnionFind::new(m);
        for &(a, b) in pairs.iter() {
            let (a, b) = (a % m, b % m);
            uf.union(a, b).unwrap();
            prop_assert!(uf.connected(b, a).unwrap());
        }
        for a in 0..m {
            prop_assert!(uf.connected(a, a).unwrap());
            for b in 0..m {
                for c in 0..m {
                    if uf.connected(a, b).unwrap() && uf.connected(b, c).unwrap() {
                        prop_assert!(uf.connected(a, c).unwrap());
                    }
                }
            }
        }
        let roots = (0..m).filter(|&x| uf.is_root(x)).count();
        prop_assert_eq!(roots, uf.count());
    });
}
