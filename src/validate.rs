use crate::graph::*;

/// Returns `true` if no edge joins two vertices of the same colour. Uncoloured
/// vertices count as sharing the colour `None`.
///
/// ```rust
/// use spancolour::graph::*;
/// use spancolour::validate::is_proper_coloring;
///
/// let vertices = vec![Vertex::with_colour(0), Vertex::with_colour(1), Vertex::with_colour(0)];
/// assert!(is_proper_coloring(&vertices, &[(0,1),(1,2)]));
/// assert!(!is_proper_coloring(&vertices, &[(0,1),(1,2),(0,2)]));
/// ```
pub fn is_proper_coloring<'a, I>(vertices:&[Vertex], edges:I) -> bool
    where I: IntoIterator<Item=&'a Edge> {
    edges.into_iter().all(|e| {
        let (u, v) = *e;
        vertices[u].color != vertices[v].color
    })
}

/// Returns all edges whose endpoints share a colour.
pub fn conflicts<'a, I>(vertices:&[Vertex], edges:I) -> Vec<Edge>
    where I: IntoIterator<Item=&'a Edge> {
    edges.into_iter()
        .copied()
        .filter(|(u, v)| vertices[*u].color == vertices[*v].color)
        .collect()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
