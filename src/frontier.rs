//! Multi-source directed reachability.
//!
//! A [`Frontier`] holds, for every vertex, the minimum number of hops from the *nearest*
//! source, following edges `u -> v` only in their stated direction.
//!
//! All sources are seeded at distance 0 before the traversal starts, so a single BFS pass
//! yields the pointwise minimum over sources. Vertices enter the queue in non-decreasing
//! distance order, hence the first time a vertex is discovered its distance is final.

use crate::error::{check_vertex, Error, Result};
use crate::graph::GraphRef;

const UNREACHED: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct Frontier {
    dist: Vec<usize>,
}

impl Frontier {
    /// Breadth-first search from every vertex in `sources` at once.
    ///
    /// Fails with `InvalidArgument` if `sources` is empty and with `InvalidVertex` if any
    /// source is out of range; both checks happen before the traversal. Duplicate sources
    /// are harmless.
    pub fn from_sources<G: GraphRef>(graph: &G, sources: &[usize]) -> Result<Self> {
        let n = graph.node_count();
        if sources.is_empty() {
            return Err(Error::invalid_argument("source set is empty"));
        }
        for &s in sources {
            check_vertex(s, n)?;
        }

        let mut dist = vec![UNREACHED; n];
        // Head-indexed queue: no pops, no reallocation once the reachable set is known.
        let mut q: Vec<usize> = Vec::new();
        for &s in sources {
            if dist[s] == UNREACHED {
                dist[s] = 0;
                q.push(s);
            }
        }

        let mut head = 0usize;
        while head < q.len() {
            let cur = q[head];
            head += 1;
            let next = dist[cur] + 1;
            for &nx in graph.neighbors_ref(cur) {
                if dist[nx] == UNREACHED {
                    dist[nx] = next;
                    q.push(nx);
                }
            }
        }

        Ok(Self { dist })
    }

    /// Single-source convenience wrapper.
    pub fn from_source<G: GraphRef>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Distance from the source set, or `None` if `v` is unreachable or out of range.
    pub fn distance(&self, v: usize) -> Option<usize> {
        match self.dist.get(v) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// `(vertex, distance)` for every reached vertex, in ascending vertex id.
    pub fn reached(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, &d)| d != UNREACHED)
            .map(|(v, &d)| (v, d))
    }
}
