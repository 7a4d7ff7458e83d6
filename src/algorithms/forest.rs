//! Colouring by repeated spanning-tree decomposition.
//!
//! Every pass builds one spanning tree of the (connected) graph. The tree first
//! takes as many not yet visited edges as it can without closing a cycle and is
//! then completed with edges visited in earlier passes. A pass ends by moving
//! its fresh edges to the visited list, so every edge of the graph belongs to
//! exactly one tree as its *fresh* edge. The passes stop once no unvisited
//! edge remains.
//!
//! Each tree is two-coloured by bfs layers. Since every edge is fresh in exactly
//! one tree $p$, its endpoints differ in bit $p$ and the colours obtained by
//! reading the bits as a binary number form a proper colouring.
//!
//! ```rust
//! use spancolour::graph::*;
//! use spancolour::generators::complete;
//! use spancolour::validate::is_proper_coloring;
//! use spancolour::algorithms::forest::color_by_forest_decomposition;
//!
//! let mut vertices = vec![Vertex::new(); 5];
//! let edges = complete(&vertices);
//! let stats = color_by_forest_decomposition(&mut vertices, &edges).unwrap();
//! assert!(is_proper_coloring(&vertices, &edges));
//! assert_eq!((stats.trees, stats.distinct_colors), (3, 5));
//! ```
use std::cmp::{max, min};

use tracing::{debug, info};

use crate::algorithms::bipartite::{combine_colourings, ColoringStats, SpanningTree};
use crate::datastructures::ComponentTracker;
use crate::error::ColouringError;
use crate::graph::*;

/// The tree under construction during a single pass.
pub struct ForestPassState {
    adj: Vec<Vec<Index>>,
    components: ComponentTracker,
    m: usize,
}

impl ForestPassState {
    pub fn new(n:usize) -> ForestPassState {
        ForestPassState { adj: vec![Vec::new(); n], components: ComponentTracker::new(), m: 0 }
    }

    /// Adds the edge to the tree unless both endpoints are already connected
    /// in it. Returns whether the edge was added.
    pub fn try_add_edge(&mut self, edge:&Edge) -> bool {
        let (u, v) = *edge;
        if !self.components.join(u, v) {
            return false
        }

        self.adj[u].push(v);
        self.adj[v].push(u);
        self.m += 1;
        true
    }

    /// Returns `true` if both endpoints are already connected in the tree.
    pub fn closes_cycle(&mut self, edge:&Edge) -> bool {
        self.components.connected(edge.0, edge.1)
    }

    /// Number of edges in the tree.
    pub fn size(&self) -> usize {
        self.m
    }

    /// Number of tree edges incident to `u`.
    pub fn tree_degree(&self, u:Index) -> usize {
        self.adj[u].len()
    }

    pub fn is_spanning(&self) -> bool {
        self.m + 1 >= self.adj.len()
    }

    pub fn into_tree(self) -> SpanningTree {
        SpanningTree::from_adjacency(self.adj, self.m)
    }
}

/// Splits the edges of a graph into a sequence of spanning trees.
///
/// The builder is an iterator over the trees. Once a pass fails because the
/// graph is disconnected the error is yielded and the iteration ends.
pub struct ForestBuilder {
    degrees: Vec<u32>,
    used: Vec<u32>,
    unvisited: EdgeSet,
    visited: Vec<Edge>,
    trees: usize,
    failed: bool,
}

impl ForestBuilder {
    /// Creates a builder for the graph on `n` vertices with the given edges.
    /// Edges are normalized, so $(i,j)$ and $(j,i)$ name the same edge.
    pub fn new<'a, I>(n:usize, edges:I) -> ForestBuilder where I: IntoIterator<Item=&'a Edge> {
        let unvisited:EdgeSet = edges.into_iter().map(normalize).collect();
        debug_assert!(unvisited.iter().all(|(u, v)| u != v && *v < n), "Graph must be simple with valid indices");

        ForestBuilder {
            degrees: degrees(n, unvisited.iter()),
            used: vec![0; n],
            unvisited,
            visited: Vec::new(),
            trees: 0,
            failed: false,
        }
    }

    /// The number of trees built so far.
    pub fn trees(&self) -> usize {
        self.trees
    }

    pub fn unvisited(&self) -> &EdgeSet {
        &self.unvisited
    }

    /// Edges that are part of some finished tree, in the order they were visited.
    pub fn visited(&self) -> &[Edge] {
        &self.visited
    }

    pub fn is_done(&self) -> bool {
        self.failed || self.unvisited.is_empty()
    }

    /// Ranks candidate edges, smallest first. The primary criterion is the
    /// smaller endpoint degree. Ties prefer edges whose endpoints have few
    /// edges in the current tree, then endpoints with few visited edges. The
    /// edge itself makes the order total.
    fn rank(&self, state:&ForestPassState, edge:&Edge) -> (u32, u32, usize, u32, Edge) {
        let (u, v) = *edge;
        let (du, dv) = (self.degrees[u], self.degrees[v]);
        (min(du, dv),
         max(du, dv),
         max(state.tree_degree(u), state.tree_degree(v)),
         min(self.used[u], self.used[v]),
         *edge)
    }

    /// Builds the next spanning tree, or returns `None` once every edge has been visited.
    pub fn next_tree(&mut self) -> Option<Result<SpanningTree, ColouringError>> {
        if self.is_done() {
            return None
        }

        let mut state = ForestPassState::new(self.degrees.len());
        let mut candidates:Vec<Edge> = self.unvisited.iter().copied().collect();
        let mut fresh = Vec::new();

        // The tree degree of an endpoint grows with every accepted edge, which
        // changes the ranking, so candidates are ranked afresh for each pick
        // rather than kept in a heap. An edge that closes a cycle keeps doing
        // so for the rest of the pass and is dropped before ranking.
        loop {
            candidates.retain(|e| !state.closes_cycle(e));
            let best = candidates.iter().enumerate()
                        .min_by_key(|(_, e)| self.rank(&state, e))
                        .map(|(pos, _)| pos);
            let Some(pos) = best else { break };
            let edge = candidates.swap_remove(pos);
            if state.try_add_edge(&edge) {
                fresh.push(edge);
            }
        }

        // Complete the tree with edges from earlier trees, oldest first.
        let mut reused = 0;
        let mut old = self.visited.iter();
        while !state.is_spanning() {
            match old.next() {
                Some(edge) => {
                    if state.try_add_edge(edge) {
                        reused += 1;
                    }
                }
                None => {
                    self.failed = true;
                    return Some(Err(ColouringError::Disconnected { tree: self.trees, edges: state.size() }))
                }
            }
        }

        for edge in &fresh {
            self.unvisited.remove(edge);
            self.used[edge.0] += 1;
            self.used[edge.1] += 1;
        }
        debug!(tree = self.trees, fresh = fresh.len(), reused, unvisited = self.unvisited.len(), "built spanning tree");
        self.visited.extend(fresh);
        self.trees += 1;

        Some(Ok(state.into_tree()))
    }
}

impl Iterator for ForestBuilder {
    type Item = Result<SpanningTree, ColouringError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_tree()
    }
}

/// Colours the graph by decomposing it into spanning trees and combining the
/// bipartitions of all trees.
///
/// Previous colours and bits of all vertices are cleared first. The graph must
/// be simple and connected. If it is not connected the run is aborted with
/// [ColouringError::Disconnected]; bits recorded by the passes completed so
/// far stay in `colouring` and no colour is assigned.
pub fn color_by_forest_decomposition<'a, I>(vertices:&mut [Vertex], edges:I) -> Result<ColoringStats, ColouringError>
    where I: IntoIterator<Item=&'a Edge> {
    for v in vertices.iter_mut() {
        v.reset();
    }

    let mut builder = ForestBuilder::new(vertices.len(), edges);
    for tree in &mut builder {
        tree?.append_bipartition(vertices);
    }

    let stats = combine_colourings(vertices, builder.trees());
    info!(trees = stats.trees, colours = stats.distinct_colors, "forest decomposition colouring");
    Ok(stats)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::*;
    use crate::validate::is_proper_coloring;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(n:usize, edges:&[Edge]) -> (usize, usize) {
        let mut vertices = vec![Vertex::new(); n];
        let stats = color_by_forest_decomposition(&mut vertices, edges).unwrap();
        assert!(is_proper_coloring(&vertices, edges));
        for v in &vertices {
            assert_eq!(v.colouring.len(), stats.trees);
        }
        (stats.trees, stats.distinct_colors)
    }

    #[test]
    fn pass_state() {
        let mut state = ForestPassState::new(4);
        assert!(state.try_add_edge(&(0,1)));
        assert!(state.try_add_edge(&(2,1)));
        assert!(state.closes_cycle(&(0,2)));
        assert!(!state.closes_cycle(&(0,3)));
        assert!(!state.try_add_edge(&(0,2)));
        assert!(!state.is_spanning());
        assert_eq!(state.tree_degree(1), 2);

        assert!(state.try_add_edge(&(3,0)));
        assert!(state.is_spanning());
        assert_eq!(state.size(), 3);

        let T = state.into_tree();
        assert_eq!(T.num_edges(), 3);
        assert_eq!(T.neighbours(0), &[1,3]);
    }

    #[test]
    fn builder_partitions_edges() {
        let edges = complete(&[(); 6]);
        let mut builder = ForestBuilder::new(6, &edges);
        let mut trees = Vec::new();
        while let Some(tree) = builder.next_tree() {
            trees.push(tree.unwrap());
        }

        assert!(builder.is_done());
        assert!(builder.unvisited().is_empty());
        assert_eq!(builder.trees(), trees.len());

        // Every edge is visited exactly once
        let mut visited = builder.visited().to_vec();
        visited.sort();
        let mut all:Vec<Edge> = edges.into_iter().collect();
        all.sort();
        assert_eq!(visited, all);

        for T in &trees {
            assert_eq!(T.num_vertices(), 6);
            assert_eq!(T.num_edges(), 5);
            assert_eq!(T.bfs_layers(0).iter().map(|l| l.len()).sum::<usize>(), 6);
        }
    }

    #[test]
    fn small_graphs() {
        assert_eq!(run(2, &[(0,1)]), (1, 2));
        assert_eq!(run(3, &[(0,1),(1,2)]), (1, 2));
        assert_eq!(run(1, &[]), (0, 1));
        assert_eq!(run(0, &[]), (0, 0));

        let mut vertices = vec![Vertex::new(); 2];
        color_by_forest_decomposition(&mut vertices, &[(0,1)]).unwrap();
        assert_ne!(vertices[0].color, vertices[1].color);
    }

    #[test]
    fn cliques() {
        let v = vec![(); 50];
        assert_eq!(run(3, &complete(&v[..3]).into_iter().collect::<Vec<_>>()), (2, 3));
        assert_eq!(run(5, &complete(&v[..5]).into_iter().collect::<Vec<_>>()), (3, 5));
        assert_eq!(run(20, &complete(&v[..20]).into_iter().collect::<Vec<_>>()), (11, 20));
    }

    #[test]
    fn more_trees_than_word_bits() {
        let edges:Vec<Edge> = complete(&[(); 130]).into_iter().collect();
        assert_eq!(run(130, &edges), (66, 130));
    }

    #[test]
    fn cycles() {
        assert_eq!(run(7, &cycle(7)), (2, 4));
        assert_eq!(run(20, &cycle(20)), (2, 2));
        assert_eq!(run(40, &cycle(40)), (2, 2));
    }

    #[test]
    fn wheels() {
        assert_eq!(run(6, &wheel(6)), (2, 4));
        let (trees, _) = run(7, &wheel(7));
        assert_eq!(trees, 2);
    }

    #[test]
    fn edge_orientation() {
        // Reversed and duplicated pairs denote the same edge
        assert_eq!(run(3, &[(1,0),(0,1),(2,1)]), (1, 2));
    }

    #[test]
    fn repeated_runs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut vertices = vec![Vertex::new(); 30];
        let edges = random_connected(&vertices, &mut rng);

        let first = color_by_forest_decomposition(&mut vertices, &edges).unwrap();
        assert!(is_proper_coloring(&vertices, &edges));
        let second = color_by_forest_decomposition(&mut vertices, &edges).unwrap();
        assert!(is_proper_coloring(&vertices, &edges));
        assert_eq!(first, second);
        assert_eq!(vertices[0].colouring.len(), second.trees);
    }

    #[test]
    fn random_graphs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in [5, 10, 25, 60] {
            for _ in 0..5 {
                let mut vertices = vec![Vertex::new(); n];
                let edges = random_connected(&vertices, &mut rng);
                let stats = color_by_forest_decomposition(&mut vertices, &edges).unwrap();
                assert!(is_proper_coloring(&vertices, &edges));
                assert!(stats.distinct_colors <= 1 << stats.trees);
            }
        }
    }

    #[test]
    fn disconnected() {
        // Triangle plus a separate edge
        let mut vertices = vec![Vertex::new(); 5];
        let edges = vec![(0,1),(1,2),(2,0),(3,4)];
        let err = color_by_forest_decomposition(&mut vertices, &edges).unwrap_err();
        assert_eq!(err, ColouringError::Disconnected { tree: 0, edges: 3 });
        assert!(vertices.iter().all(|v| v.color.is_none()));

        let mut builder = ForestBuilder::new(5, &edges);
        assert!(matches!(builder.next(), Some(Err(ColouringError::Disconnected { .. }))));
        assert!(builder.next().is_none());
    }

    #[test]
    fn isolated_vertex() {
        // An isolated vertex stalls the very first tree
        let mut vertices = vec![Vertex::new(); 4];
        let edges = vec![(0,1),(1,2)];
        let err = color_by_forest_decomposition(&mut vertices, &edges).unwrap_err();
        assert_eq!(err, ColouringError::Disconnected { tree: 0, edges: 2 });
    }
}
