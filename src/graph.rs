//! Vertices, edges and the handful of helpers shared by all colouring algorithms.
//!
//! A graph is simply a slice of [`Vertex`] values together with a collection of
//! [`Edge`] pairs. Vertices have no identity beyond their position in the slice,
//! an edge $(i,j)$ refers to `vertices[i]` and `vertices[j]`.
//!
//! ```rust
//! use spancolour::graph::*;
//!
//! let vertices = vec![Vertex::new(); 3];
//! let edges:Vec<Edge> = vec![(0,1),(2,1)];
//! assert_eq!(degrees(vertices.len(), edges.iter()), vec![1,2,1]);
//! assert_eq!(normalize(&(2,1)), (1,2));
//! ```
use std::fmt;

use fxhash::{FxHashMap, FxHashSet};
use num_bigint::BigUint;

pub type Index = usize;
pub type Edge = (Index, Index);
pub type EdgeSet = FxHashSet<Edge>;
pub type VertexMap<T> = FxHashMap<Index, T>;
/// Colours are unbounded, a forest decomposition into $t$ trees produces
/// colours below $2^t$.
pub type Colour = BigUint;

/// A vertex of the graph. Only the position in the caller's vertex sequence
/// identifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    /// The final colour, or `None` until an algorithm has run.
    pub color: Option<Colour>,
    /// One bit per decomposition pass, in pass order. Only the forest
    /// decomposition writes to it.
    pub colouring: Vec<u8>,
}

impl Vertex {
    pub fn new() -> Vertex {
        Vertex::default()
    }

    pub fn with_colour(colour:u64) -> Vertex {
        Vertex { color: Some(Colour::from(colour)), colouring: Vec::new() }
    }

    /// Forgets the results of any previous colouring.
    pub fn reset(&mut self) {
        self.color = None;
        self.colouring.clear();
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.color {
            Some(c) => write!(f, "<Vertex {}: {:?}>", c, self.colouring),
            None => write!(f, "<Vertex -: {:?}>", self.colouring)
        }
    }
}

/// Returns the edge with its smaller endpoint first, so that $(i,j)$ and
/// $(j,i)$ compare equal.
pub fn normalize(edge:&Edge) -> Edge {
    let (u, v) = *edge;
    if u <= v { (u, v) } else { (v, u) }
}

/// Computes the degree of every vertex in a graph on `n` vertices.
pub fn degrees<'a, I>(n:usize, edges:I) -> Vec<u32> where I: IntoIterator<Item=&'a Edge> {
    let mut res = vec![0; n];
    for e in edges {
        let (u, v) = *e;
        res[u] += 1;
        res[v] += 1;
    }
    res
}

/// Counts the distinct colours among all coloured vertices.
pub fn count_colours(vertices:&[Vertex]) -> usize {
    vertices.iter()
        .filter_map(|v| v.color.as_ref())
        .collect::<FxHashSet<&Colour>>()
        .len()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
