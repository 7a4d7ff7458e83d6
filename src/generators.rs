//! Edge sets for named and random graphs.
//!
//! All generators take the vertex sequence only for its length. Random
//! generators draw from a caller-supplied [Rng], so seeded generators make
//! them reproducible:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use spancolour::graph::*;
//! use spancolour::generators::*;
//!
//! let vertices = vec![Vertex::new(); 10];
//! let mut rng = StdRng::seed_from_u64(3);
//! let edges = random_connected(&vertices, &mut rng);
//! assert!(connected(&vertices, &edges));
//! assert_eq!(complete(&vertices).len(), 45);
//! ```
use itertools::Itertools;
use rand::Rng;

use crate::datastructures::ComponentTracker;
use crate::graph::*;

/// All pairs $\{i,j\}$ with $i < j$, in lexicographic order.
fn all_pairs(n:usize) -> Vec<Edge> {
    (0..n).combinations(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Generates the edges of a complete graph (clique).
pub fn complete<V>(vertices:&[V]) -> EdgeSet {
    all_pairs(vertices.len()).into_iter().collect()
}

/// Generates the edges of a cycle on `n` vertices, $(i, i+1 \bmod n)$ for all $i$.
///
/// The result is always simple: fewer than two vertices give no edges and two
/// vertices give the single edge $(0,1)$.
pub fn cycle(n:usize) -> Vec<Edge> {
    match n {
        0 | 1 => Vec::new(),
        2 => vec![(0,1)],
        _ => (0..n).map(|i| (i, (i+1) % n)).collect()
    }
}

/// Generates the edges of a wheel on `n` vertices: a cycle on the first
/// $n-1$ vertices and the hub $n-1$ adjacent to all of them. Like [cycle],
/// small cases degenerate to simple graphs.
pub fn wheel(n:usize) -> Vec<Edge> {
    let Some(hub) = n.checked_sub(1) else { return Vec::new() };
    let mut res = cycle(hub);
    res.extend((0..hub).map(|i| (hub, i)));
    res
}

/// Removes a random number of edges, between none and all but one, from the
/// complete graph. The result need not be connected.
pub fn random<V, R>(vertices:&[V], rng:&mut R) -> EdgeSet where R: Rng {
    let mut edges = all_pairs(vertices.len());
    if edges.is_empty() {
        return EdgeSet::default()
    }

    let removals = rng.gen_range(0..edges.len());
    for _ in 0..removals {
        let i = rng.gen_range(0..edges.len());
        edges.swap_remove(i);
    }

    edges.into_iter().collect()
}

/// Adds random edges of the complete graph until every vertex is touched and
/// all touched vertices form a single component. Edges that close cycles are
/// kept, so the result is usually not a tree.
pub fn random_connected<V, R>(vertices:&[V], rng:&mut R) -> EdgeSet where R: Rng {
    let n = vertices.len();
    let mut remaining = all_pairs(n);
    let mut comps = ComponentTracker::new();
    let mut res = EdgeSet::default();

    while !(comps.num_touched() == n && comps.num_components() == 1) && !remaining.is_empty() {
        let i = rng.gen_range(0..remaining.len());
        let (u, v) = remaining.swap_remove(i);
        res.insert((u, v));
        comps.join(u, v);
    }

    res
}

/// Tests whether every vertex can be reached from vertex $0$. Edges are
/// treated as undirected.
pub fn connected<'a, V, I>(vertices:&[V], edges:I) -> bool where I: IntoIterator<Item=&'a Edge> {
    let n = vertices.len();
    let mut adj:VertexMap<Vec<Index>> = VertexMap::default();
    for (u, v) in edges {
        adj.entry(*u).or_default().push(*v);
        adj.entry(*v).or_default().push(*u);
    }

    let mut seen = vec![false; n];
    let mut stack = vec![0];
    let mut reached = 0;
    while let Some(u) = stack.pop() {
        if u >= n || seen[u] {
            continue;
        }
        seen[u] = true;
        reached += 1;

        if let Some(N) = adj.get(&u) {
            stack.extend(N.iter().filter(|v| !seen[**v]));
        }
    }

    reached == n
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
