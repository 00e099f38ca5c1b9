//! A* search over a [GridMap] with eager cost relaxation and lazy deletion
//! of superseded frontier entries.
//!
//! Discovered states live in an insertion-ordered [IndexMap] that doubles as
//! a node arena: the map index is the node handle, and parent links are
//! indices into the same map. This keeps path reconstruction a plain index
//! chase with no reference cycles to manage.

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::info;

use crate::grid::{Cell, Direction, GridMap};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Sentinel parent index of the root node.
const NO_PARENT: usize = usize::MAX;

/// Per-state bookkeeping in the arena. `cost` is the best known cost from
/// the start; a cheaper rediscovery overwrites parent, action and cost in
/// place while the stale frontier entry stays queued.
struct NodeRecord {
    parent: usize,
    action: Option<Direction>,
    cost: u32,
}

/// A frontier entry pointing at an arena slot.
struct FrontierEntry {
    priority: u32,
    seq: u64,
    index: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.seq.eq(&other.seq)
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both comparisons are reversed: the
        // smallest priority wins, and among equal priorities the entry
        // pushed first pops first. Without the sequence key, equal-priority
        // order would be unspecified and runs would not be reproducible.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The outcome of a successful [solve] call.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Moves from start to goal, in order.
    pub actions: Vec<Direction>,
    /// Cells visited by the path, from the first step after start through goal.
    pub cells: Vec<Cell>,
    /// Cost recorded for the goal; one unit per move.
    pub total_cost: u32,
    /// States popped from the frontier and expanded.
    pub explored: FxHashSet<Cell>,
    /// Number of frontier pops, counting stale duplicate entries.
    pub explored_count: usize,
    /// Final best-known cost per discovered cell, used for cost annotation
    /// when rendering.
    pub cost_to_reach: FxHashMap<Cell, u32>,
}

impl SearchResult {
    /// Whether `cell` lies on the solution path (start excluded).
    pub fn on_path(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Computes a shortest path from the map's start to its goal. Returns [None]
/// if the frontier empties without reaching the goal; this is the normal
/// no-path outcome, not an error.
///
/// All search state is local to one call, so a shared [GridMap] can be
/// solved from multiple threads independently.
pub fn solve(map: &GridMap) -> Option<SearchResult> {
    let mut nodes: FxIndexMap<Cell, NodeRecord> = FxIndexMap::default();
    nodes.insert(
        map.start(),
        NodeRecord {
            parent: NO_PARENT,
            action: None,
            cost: 0,
        },
    );
    let mut explored: FxHashSet<Cell> = FxHashSet::default();
    let mut explored_count = 0;
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    frontier.push(FrontierEntry {
        priority: map.heuristic(map.start()),
        seq,
        index: 0,
    });

    while let Some(FrontierEntry { index, .. }) = frontier.pop() {
        explored_count += 1;
        let (cell, cost) = {
            let (cell, record) = nodes.get_index(index).unwrap();
            (*cell, record.cost)
        };
        if cell == map.goal() {
            info!("goal {} reached after {} expansions", cell, explored_count);
            let (actions, cells) = reverse_path(&nodes, index);
            let cost_to_reach = nodes.iter().map(|(&cell, record)| (cell, record.cost)).collect();
            return Some(SearchResult {
                actions,
                cells,
                total_cost: cost,
                explored,
                explored_count,
                cost_to_reach,
            });
        }
        explored.insert(cell);
        for (action, neighbor) in map.neighbors(cell) {
            // A state is finalized on first expansion; the consistent
            // heuristic guarantees no cheaper path to it can turn up later.
            if explored.contains(&neighbor) {
                continue;
            }
            let candidate_cost = cost + 1;
            let (priority, child) = match nodes.entry(neighbor) {
                Vacant(e) => {
                    let priority = candidate_cost + map.heuristic(neighbor);
                    let child = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        action: Some(action),
                        cost: candidate_cost,
                    });
                    (priority, child)
                }
                Occupied(mut e) => {
                    if e.get().cost > candidate_cost {
                        let priority = candidate_cost + map.heuristic(neighbor);
                        let child = e.index();
                        e.insert(NodeRecord {
                            parent: index,
                            action: Some(action),
                            cost: candidate_cost,
                        });
                        (priority, child)
                    } else {
                        continue;
                    }
                }
            };
            // The stale higher-cost entry for a relaxed state stays in the
            // heap; the cheaper entry pops first and the leftover expansion
            // is a no-op. Lazy deletion trades heap size for simplicity.
            seq += 1;
            frontier.push(FrontierEntry {
                priority,
                seq,
                index: child,
            });
        }
    }
    info!("frontier exhausted after {} expansions, no path", explored_count);
    None
}

/// Walks parent indices from the goal slot back to the root, collecting the
/// action and cell of every non-root node, then reverses into start→goal
/// order.
fn reverse_path(
    nodes: &FxIndexMap<Cell, NodeRecord>,
    goal_index: usize,
) -> (Vec<Direction>, Vec<Cell>) {
    let mut actions = Vec::new();
    let mut cells = Vec::new();
    let mut index = goal_index;
    while let Some((&cell, record)) = nodes.get_index(index) {
        match record.action {
            Some(action) => {
                actions.push(action);
                cells.push(cell);
                index = record.parent;
            }
            None => break,
        }
    }
    actions.reverse();
    cells.reverse();
    (actions, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_priority_then_insertion() {
        let mut heap = BinaryHeap::new();
        for (priority, seq) in [(4, 0), (3, 1), (4, 2), (3, 3)] {
            heap.push(FrontierEntry {
                priority,
                seq,
                index: seq as usize,
            });
        }
        let popped: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.seq)).collect();
        assert_eq!(popped, vec![1, 3, 0, 2]);
    }

    #[test]
    fn solves_around_a_center_wall() {
        let map = GridMap::new(
            3,
            3,
            |cell| cell == Cell::new(1, 1),
            Cell::new(0, 0),
            Cell::new(2, 2),
        )
        .unwrap();
        let result = solve(&map).unwrap();
        assert_eq!(result.total_cost, 4);
        assert_eq!(result.cells.len(), 4);
        assert_eq!(*result.cells.last().unwrap(), Cell::new(2, 2));
        assert!(!result.explored.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn adjacent_start_and_goal() {
        let map = GridMap::new(1, 2, |_| false, Cell::new(0, 0), Cell::new(0, 1)).unwrap();
        let result = solve(&map).unwrap();
        assert_eq!(result.actions, vec![Direction::Right]);
        assert_eq!(result.cells, vec![Cell::new(0, 1)]);
        assert_eq!(result.total_cost, 1);
    }

    #[test]
    fn walled_off_goal_yields_none() {
        // Wall column between start and goal.
        let map = GridMap::new(
            3,
            3,
            |cell| cell.col == 1,
            Cell::new(0, 0),
            Cell::new(0, 2),
        )
        .unwrap();
        assert!(solve(&map).is_none());
    }

    #[test]
    fn cost_table_holds_start_and_goal() {
        let map = GridMap::new(2, 2, |_| false, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        let result = solve(&map).unwrap();
        assert_eq!(result.cost_to_reach[&Cell::new(0, 0)], 0);
        assert_eq!(result.cost_to_reach[&Cell::new(1, 1)], result.total_cost);
    }
}
