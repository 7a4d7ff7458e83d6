//! Colouring algorithms.
//!
//! [naive] enumerates all colourings and is only usable for a handful of
//! vertices. [forest] decomposes the graph into spanning trees and combines
//! their bipartitions (see [bipartite]), which scales to large graphs at the
//! cost of optimality.
pub mod bipartite;
pub mod forest;
pub mod naive;

pub use bipartite::ColoringStats;
pub use forest::color_by_forest_decomposition;
pub use naive::color_naive;
