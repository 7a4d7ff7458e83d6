//! Two-colouring of spanning trees and the folding of per-tree bits into colours.
use std::fmt;

use crate::graph::*;

/// A spanning tree produced by one decomposition pass, stored as adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    adj: Vec<Vec<Index>>,
    m: usize,
}

impl SpanningTree {
    pub(crate) fn from_adjacency(adj:Vec<Vec<Index>>, m:usize) -> SpanningTree {
        SpanningTree { adj, m }
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.m
    }

    pub fn neighbours(&self, u:Index) -> &[Index] {
        &self.adj[u]
    }

    /// Returns the tree's edges, each once with its smaller endpoint first.
    pub fn edges(&self) -> impl Iterator<Item=Edge> + '_ {
        self.adj.iter().enumerate()
            .flat_map(|(u, N)| N.iter().filter(move |v| u < **v).map(move |v| (u, *v)))
    }

    /// Conducts a bfs from `root` and returns the layers in order of
    /// increasing distance. Inside a layer vertices appear in visit order.
    pub fn bfs_layers(&self, root:Index) -> Vec<Vec<Index>> {
        let mut seen = vec![false; self.adj.len()];
        seen[root] = true;

        let mut res = vec![vec![root]];
        loop {
            let mut next = Vec::new();
            for u in &res[res.len()-1] {
                for v in &self.adj[*u] {
                    if !seen[*v] {
                        seen[*v] = true;
                        next.push(*v);
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            res.push(next);
        }

        res
    }

    /// Appends the bipartition bit of every vertex to its `colouring`. The root,
    /// vertex $0$, receives $0$ and the bits alternate from layer to layer.
    pub fn append_bipartition(&self, vertices:&mut [Vertex]) {
        if self.adj.is_empty() {
            return
        }

        for (depth, layer) in self.bfs_layers(0).iter().enumerate() {
            let bit = (depth % 2) as u8;
            for v in layer {
                vertices[*v].colouring.push(bit);
            }
        }
    }
}

/// Summary of a forest decomposition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringStats {
    pub trees: usize,
    pub distinct_colors: usize,
}

impl fmt::Display for ColoringStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trees: {}, colours: {}", self.trees, self.distinct_colors)
    }
}

/// Folds each vertex's bits $b_0,\dots,b_{t-1}$ into the colour $\sum_i b_i 2^i$.
pub fn combine_colourings(vertices:&mut [Vertex], trees:usize) -> ColoringStats {
    for v in vertices.iter_mut() {
        debug_assert_eq!(v.colouring.len(), trees);
        let mut colour = Colour::default();
        for (i, b) in v.colouring.iter().enumerate() {
            if *b != 0 {
                colour.set_bit(i as u64, true);
            }
        }
        v.color = Some(colour);
    }

    ColoringStats { trees, distinct_colors: count_colours(vertices) }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
