use std::collections::{BinaryHeap, HashSet};

use causeway_core::Point3;

use crate::highway::{CostWeights, NeighborPolicy};

/// An ordered sequence of points, start first.
pub type Path = Vec<Point3>;

/// Default expansion ceiling of a single search.
pub const DEFAULT_CEILING: usize = 5000;

/// Outcome of a bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// The goal was reached.
    Found(Path),
    /// The expansion ceiling was hit before reaching the goal.
    Exhausted,
    /// The frontier emptied: the goal cannot be reached from the start.
    NoRoute,
}

impl Search {
    /// The path, if one was found.
    pub fn path(self) -> Option<Path> {
        match self {
            Search::Found(path) => Some(path),
            Search::Exhausted | Search::NoRoute => None,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of node expansions per search.
    pub ceiling: usize,
    pub policy: NeighborPolicy,
    pub weights: CostWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            policy: NeighborPolicy::default(),
            weights: CostWeights::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal node for the best-first search
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point3,
    pub(crate) cost: f64,
    pub(crate) parent: usize,
}

/// Reference into the node arena, ordered by `cost` for use in `BinaryHeap`.
///
/// Arena indices grow with insertion, so they double as a FIFO tie-break.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, oldest first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Bounded best-first route search.
///
/// `Router` owns its node arena, frontier, closed set and neighbor buffer
/// so that repeated queries reuse their allocations.
pub struct Router {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) closed: HashSet<Point3>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point3>,
    pub(crate) expansions: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Router {
    /// Create a new `Router` with the given settings.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            nbuf: Vec::with_capacity(8),
            expansions: 0,
        }
    }

    /// The settings in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the settings. Caches are kept.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Number of expansions performed by the most recent search.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Clear per-query state, keeping capacity.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.expansions = 0;
    }

    /// Add a node to the arena and the frontier.
    pub(crate) fn push(&mut self, pos: Point3, cost: f64, parent: usize) {
        let idx = self.nodes.len();
        self.nodes.push(SearchNode { pos, cost, parent });
        self.open.push(NodeRef { idx, cost });
    }

    /// Walk parent links back from `idx`, returning the path start first.
    pub(crate) fn reconstruct(&self, mut idx: usize) -> Path {
        let mut path = Vec::new();
        while idx != usize::MAX {
            let node = &self.nodes[idx];
            path.push(node.pos);
            idx = node.parent;
        }
        path.reverse();
        path
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_config_round_trip() {
        let config = SearchConfig {
            ceiling: 1234,
            ..SearchConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
