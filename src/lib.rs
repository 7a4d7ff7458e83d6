#![allow(non_snake_case)]

//! Graph colouring for simple, connected, undirected graphs.
//!
//! A graph is a slice of [`Vertex`](graph::Vertex) values and a collection of
//! index pairs. Two colourers are provided:
//!
//! - [`color_naive`](algorithms::naive::color_naive) tries every assignment with
//!   $1, 2, \dots$ colours and is meant as an oracle for tiny graphs,
//! - [`color_by_forest_decomposition`](algorithms::forest::color_by_forest_decomposition)
//!   repeatedly decomposes the graph into spanning trees and combines the
//!   bipartitions of the trees into one colour per vertex.
//!
//! ```rust
//! use spancolour::graph::*;
//! use spancolour::generators::cycle;
//! use spancolour::validate::is_proper_coloring;
//! use spancolour::algorithms::{color_naive, color_by_forest_decomposition};
//!
//! let mut vertices = vec![Vertex::new(); 7];
//! let edges = cycle(7);
//!
//! let stats = color_by_forest_decomposition(&mut vertices, &edges).unwrap();
//! assert!(is_proper_coloring(&vertices, &edges));
//! println!("{}", stats); // Trees: 2, colours: 4
//!
//! color_naive(&mut vertices, &edges).unwrap();
//! assert_eq!(count_colours(&vertices), 3);
//! ```
pub mod algorithms;
pub mod datastructures;
pub mod error;
pub mod generators;
pub mod graph;
pub mod validate;

pub use error::ColouringError;
