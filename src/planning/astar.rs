//! A* shortest-path search on the occupancy grid.
//!
//! Search is over 4-connected neighbors with unit step cost and the
//! Manhattan-distance heuristic, which is admissible and consistent for
//! unit-cost grid movement, so the first time the goal is popped the path
//! is optimal and closed cells never need re-opening.
//!
//! Ties on `f` are broken by insertion order into the open set (first
//! inserted wins), which pins down which of several equal-cost optimal
//! paths is returned.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::config::PlannerConfig;
use crate::grid::{Cell, Direction, GridModel};
use crate::planning::Path;

/// Search node: a cell with its cumulative cost and a back-reference to
/// its predecessor in the node arena. Owned by one search invocation.
#[derive(Clone, Debug)]
struct PathNode {
    cell: Cell,
    g: u32,
    parent: Option<usize>,
}

/// Open set entry ordered by ascending `f`, then by insertion sequence.
#[derive(Clone, Debug)]
struct OpenEntry {
    f: u32,
    seq: u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; earlier insertion wins ties
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stateless A* path finder.
///
/// A search is a pure function of the grid and the endpoint pair; the
/// finder itself only carries configuration and can be shared freely.
#[derive(Debug, Clone)]
pub struct PathFinder {
    config: PlannerConfig,
}

impl PathFinder {
    /// Create a path finder with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a path finder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Find a shortest walkable path from `start` to `end` inclusive.
    ///
    /// Returns the empty path when `end` is unreachable. A blocked start
    /// or end cell is not rejected up front: the start is seeded into the
    /// search regardless, and a blocked end simply never gets reached
    /// (except for the degenerate `start == end` case, which yields a
    /// single-cell path).
    pub fn find_path(&self, grid: &GridModel, start: Cell, end: Cell) -> Path {
        let mut nodes: Vec<PathNode> = Vec::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut closed: HashSet<Cell> = HashSet::new();
        let mut seq: u64 = 0;

        nodes.push(PathNode {
            cell: start,
            g: 0,
            parent: None,
        });
        open.push(OpenEntry {
            f: heuristic(start, end),
            seq,
            node: 0,
        });

        let mut expansions = 0usize;

        while let Some(entry) = open.pop() {
            let current = nodes[entry.node].clone();

            if current.cell == end {
                return reconstruct(&nodes, entry.node);
            }

            // A cheaper route to a finalized cell cannot exist under a
            // consistent heuristic with unit costs; skip duplicates.
            if !closed.insert(current.cell) {
                continue;
            }

            expansions += 1;
            if expansions > self.config.max_expansions {
                tracing::warn!(
                    max_expansions = self.config.max_expansions,
                    "A* expansion budget exhausted, treating goal as unreachable"
                );
                return Path::empty();
            }

            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                let neighbor = match current.cell.offset(dr, dc) {
                    Some(c) => c,
                    None => continue,
                };

                if !grid.is_walkable(neighbor) || closed.contains(&neighbor) {
                    continue;
                }

                let g = current.g + 1;
                nodes.push(PathNode {
                    cell: neighbor,
                    g,
                    parent: Some(entry.node),
                });
                seq += 1;
                open.push(OpenEntry {
                    f: g + heuristic(neighbor, end),
                    seq,
                    node: nodes.len() - 1,
                });
            }
        }

        // Open set exhausted without reaching the goal
        Path::empty()
    }
}

/// Manhattan distance heuristic.
#[inline]
fn heuristic(from: Cell, to: Cell) -> u32 {
    from.manhattan_distance(&to) as u32
}

/// Follow parent links back to the start, then reverse.
fn reconstruct(nodes: &[PathNode], goal: usize) -> Path {
    let mut cells = Vec::new();
    let mut current = Some(goal);

    while let Some(idx) = current {
        cells.push(nodes[idx].cell);
        current = nodes[idx].parent;
    }

    cells.reverse();
    Path::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn grid_from(rows: Vec<Vec<u8>>) -> GridModel {
        GridModel::from_rows(rows).unwrap()
    }

    /// Brute-force BFS shortest path length in cells, for optimality checks.
    fn bfs_length(grid: &GridModel, start: Cell, end: Cell) -> Option<usize> {
        if start == end {
            return Some(1);
        }
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back((start, 1usize));

        while let Some((cell, len)) = queue.pop_front() {
            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                let next = match cell.offset(dr, dc) {
                    Some(c) => c,
                    None => continue,
                };
                if !grid.is_walkable(next) || !visited.insert(next) {
                    continue;
                }
                if next == end {
                    return Some(len + 1);
                }
                queue.push_back((next, len + 1));
            }
        }
        None
    }

    fn assert_valid_path(grid: &GridModel, path: &Path, start: Cell, end: Cell) {
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(end));
        assert!(path.is_contiguous());
        // No blocked cell beyond the seeded start
        for &cell in &path.cells()[1..] {
            assert!(grid.is_walkable(cell), "path visits blocked cell {:?}", cell);
        }
    }

    #[test]
    fn test_open_grid_3x3() {
        let grid = grid_from(vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, Cell::new(0, 0), Cell::new(2, 2));
    }

    #[test]
    fn test_path_around_wall() {
        let grid = grid_from(vec![
            vec![0, 1, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(0, 2));
        // Around the wall: down the left edge, across, up the right edge
        assert_eq!(path.len(), 7);
        assert_valid_path(&grid, &path, Cell::new(0, 0), Cell::new(0, 2));
    }

    #[test]
    fn test_full_blocking_row_is_unreachable() {
        let grid = grid_from(vec![
            vec![0, 0, 0],
            vec![1, 1, 1],
            vec![0, 0, 0],
        ]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn test_start_equals_end() {
        let grid = grid_from(vec![vec![0, 0], vec![0, 0]]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(1, 1), Cell::new(1, 1));
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_blocked_end_is_unreachable() {
        // Endpoints are not rejected up front; a blocked end is simply
        // never inserted as a neighbor, so the search returns empty.
        let grid = grid_from(vec![vec![0, 0], vec![0, 1]]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(1, 1));
        assert!(path.is_empty());
    }

    #[test]
    fn test_blocked_start_still_searches() {
        // The start is seeded regardless of its own state; only the
        // neighbors it expands into must be walkable.
        let grid = grid_from(vec![vec![1, 0], vec![0, 0]]);
        let finder = PathFinder::with_defaults();

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_blocked_start_equals_end() {
        let grid = grid_from(vec![vec![1, 0], vec![0, 0]]);
        let finder = PathFinder::with_defaults();

        // Degenerate case pinned: a single-cell path even though blocked
        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(0, 0));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_expansion_budget_exhaustion() {
        let grid = grid_from(vec![vec![0; 20]; 20]);
        let finder = PathFinder::new(PlannerConfig { max_expansions: 3 });

        let path = finder.find_path(&grid, Cell::new(0, 0), Cell::new(19, 19));
        assert!(path.is_empty());
    }

    #[test]
    fn test_optimality_matches_bfs() {
        // Deterministic pseudo-random grids, checked against brute-force
        // BFS shortest-path lengths.
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let finder = PathFinder::with_defaults();

        for _ in 0..50 {
            let rows = 4 + (next() % 5) as usize;
            let cols = 4 + (next() % 5) as usize;
            let source: Vec<Vec<u8>> = (0..rows)
                .map(|_| (0..cols).map(|_| (next() % 10 < 3) as u8).collect())
                .collect();
            let grid = grid_from(source);

            let start = Cell::new((next() % rows as u64) as usize, (next() % cols as u64) as usize);
            let end = Cell::new((next() % rows as u64) as usize, (next() % cols as u64) as usize);
            if !grid.is_walkable(start) || !grid.is_walkable(end) {
                continue;
            }

            let path = finder.find_path(&grid, start, end);
            match bfs_length(&grid, start, end) {
                Some(expected) => {
                    assert_eq!(
                        path.len(),
                        expected,
                        "suboptimal path on {:?} -> {:?}",
                        start,
                        end
                    );
                    assert_valid_path(&grid, &path, start, end);
                }
                None => assert!(path.is_empty()),
            }
        }
    }

    #[test]
    fn test_tie_break_is_stable() {
        // Two equal-cost optimal routes exist; repeated searches must
        // return the same one (insertion order breaks f ties).
        let grid = grid_from(vec![vec![0, 0], vec![0, 0]]);
        let finder = PathFinder::with_defaults();

        let first = finder.find_path(&grid, Cell::new(0, 0), Cell::new(1, 1));
        for _ in 0..10 {
            let again = finder.find_path(&grid, Cell::new(0, 0), Cell::new(1, 1));
            assert_eq!(first, again);
        }
    }
}
