//! Exhaustive colouring, the correctness oracle for small graphs.
//!
//! For `k = 1, 2, ...` every assignment of the colours $\{0,\dots,k-1\}$ is
//! enumerated in mixed-radix order with vertex $0$ as the least significant
//! digit, and the first proper one is kept. A single attempt costs $k^n$
//! checks, which is why the search refuses to start an attempt once that number
//! exceeds the configured maximum.
use tracing::debug;

use crate::error::{ColouringError, Exhaustion};
use crate::graph::*;
use crate::validate::is_proper_coloring;

/// Default bound on the number of candidate assignments per attempt.
pub const MAX_CHECKS: u64 = 100_000;

/// Colours the graph exhaustively with as few colours as the search reaches,
/// using the default cutoff [MAX_CHECKS].
///
/// On success every vertex carries a colour. On failure the colours of the
/// last rejected candidate remain in place and must be ignored.
pub fn color_naive<'a, I>(vertices:&mut [Vertex], edges:I) -> Result<(), ColouringError>
    where I: IntoIterator<Item=&'a Edge> {
    color_naive_bounded(vertices, edges, MAX_CHECKS)
}

/// Like [color_naive], but gives up before any attempt that would need more
/// than `max_checks` candidate assignments.
pub fn color_naive_bounded<'a, I>(vertices:&mut [Vertex], edges:I, max_checks:u64) -> Result<(), ColouringError>
    where I: IntoIterator<Item=&'a Edge> {
    let edges:Vec<Edge> = edges.into_iter().copied().collect();
    let n = vertices.len();

    let mut k:u32 = 1;
    loop {
        if k as usize > n {
            return Err(ColouringError::Exhausted { colours: k, vertices: n, reason: Exhaustion::NoColouring })
        }
        let checks = candidates(k, n);
        let checks = match checks {
            Some(c) if c <= max_checks => c,
            _ => {
                let checks = checks.unwrap_or(u64::MAX);
                return Err(ColouringError::Exhausted { colours: k, vertices: n, reason: Exhaustion::TooManyChecks { checks } })
            }
        };

        debug!(colours = k, checks, "trying exhaustive colouring");
        for mut code in 0..checks {
            for v in vertices.iter_mut() {
                v.color = Some(Colour::from(code % k as u64));
                code /= k as u64;
            }

            if is_proper_coloring(vertices, &edges) {
                debug!(colours = k, "found colouring");
                return Ok(())
            }
        }

        k += 1;
    }
}

/// Computes $k^n$, or `None` if it does not fit into a `u64`.
fn candidates(k:u32, n:usize) -> Option<u64> {
    let n = u32::try_from(n).ok()?;
    (k as u64).checked_pow(n)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
