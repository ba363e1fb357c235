//! The breadth-first traversal and distance reconstruction.

use std::collections::VecDeque;
use waggle_grid::{CombConfig, GridError, Honeycomb};

/// Minimum number of hex steps from the comb's start cell to its target
/// cell, or `None` when no unblocked path connects them.
///
/// A blocked cell is never enqueued, so a blocked start or target (when
/// they are distinct cells) makes the target unreachable. A search whose
/// start and target are the same cell returns `Some(0)` without
/// traversal — no step is walked, so the blocked flag does not apply.
///
/// The frontier is a FIFO; explored flags and predecessor links are side
/// tables indexed by canonical rank, so the comb itself stays immutable
/// and may serve any number of searches. Each reached cell is parented
/// exactly once, at the depth it is first discovered, and the returned
/// distance is reconstructed by walking those links back to the start —
/// by BFS optimality this is the minimum step count. Draining the
/// frontier without dequeuing the target is reported as `None`, never as
/// a distance derived from whatever cell was dequeued last.
///
/// # Examples
///
/// ```
/// use waggle_core::CellId;
/// use waggle_grid::{CombConfig, Honeycomb};
/// use waggle_search::shortest_distance;
///
/// // Two opposite corners of a radius-1 comb.
/// let config = CombConfig::new(2, CellId(1), CellId(7), []);
/// let comb = Honeycomb::build(&config).unwrap();
/// assert_eq!(shortest_distance(&comb), Some(2));
///
/// // Blocking the centre leaves a path around the ring.
/// let config = CombConfig::new(2, CellId(1), CellId(7), [CellId(4)]);
/// let comb = Honeycomb::build(&config).unwrap();
/// assert_eq!(shortest_distance(&comb), Some(3));
/// ```
pub fn shortest_distance(comb: &Honeycomb) -> Option<u32> {
    let start = comb.start_rank();
    let target = comb.target_rank();
    if start == target {
        return Some(0);
    }
    if comb.start().is_blocked() || comb.target().is_blocked() {
        return None;
    }

    let mut explored = vec![false; comb.cell_count()];
    let mut parent: Vec<Option<u32>> = vec![None; comb.cell_count()];
    let mut frontier = VecDeque::new();

    explored[start] = true;
    frontier.push_back((start, comb.start().coord()));

    while let Some((current, coord)) = frontier.pop_front() {
        if current == target {
            return Some(steps_to_root(&parent, current));
        }
        for nb_coord in coord.neighbours() {
            if let Some((rank, cell)) = comb.cell_entry(&nb_coord) {
                if cell.is_blocked() || explored[rank] {
                    continue;
                }
                explored[rank] = true;
                // Rank fits u32: the cell count is validated to.
                parent[rank] = Some(current as u32);
                frontier.push_back((rank, nb_coord));
            }
        }
    }
    None
}

/// Build the comb described by `config` and search it in one call.
///
/// This is the reusable library surface: `Ok(None)` means the target is
/// unreachable, and any step-budget policy is the caller's to apply.
///
/// # Examples
///
/// ```
/// use waggle_core::CellId;
/// use waggle_grid::CombConfig;
/// use waggle_search::solve;
///
/// let config = CombConfig::new(6, CellId(1), CellId(45), []);
/// assert_eq!(solve(&config).unwrap(), Some(5));
/// ```
pub fn solve(config: &CombConfig) -> Result<Option<u32>, GridError> {
    let comb = Honeycomb::build(config)?;
    Ok(shortest_distance(&comb))
}

/// Count predecessor hops from `end` back to the search root.
fn steps_to_root(parent: &[Option<u32>], end: usize) -> u32 {
    let mut steps = 0;
    let mut cursor = end;
    while let Some(prev) = parent[cursor] {
        steps += 1;
        cursor = prev as usize;
    }
    steps
}
