//! Shortest ancestral path (SAP) queries.
//!
//! An *ancestral path* between two vertex groups `V` and `W` is a pair of directed paths, one
//! from some `v ∈ V` and one from some `w ∈ W`, that end at a common vertex (the ancestor).
//! The engine reports the ancestor minimizing the summed length of the two paths.
//!
//! Public invariants:
//! - Every query builds two fresh [`Frontier`]s and scans all vertices once, in ascending id.
//! - Among ancestors with the same minimal total, the smallest vertex id wins.
//! - "No common ancestor" is `Ok(None)`; malformed input is an `Err`, raised before any search.
//! - The graph is an immutable snapshot, so queries may run concurrently without locking.

use std::sync::Arc;

use log::debug;

use crate::error::{check_vertex, Error, Result};
use crate::frontier::Frontier;
use crate::graph::Digraph;

/// The answer to one SAP query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ancestral {
    /// Common ancestor on a shortest ancestral path.
    pub ancestor: usize,
    /// `dist(V, ancestor) + dist(W, ancestor)`.
    pub length: usize,
}

/// SAP query engine over a shared, immutable [`Digraph`].
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Arc<Digraph>,
}

impl Sap {
    /// Take ownership of `graph`. No structural validation is done here; see
    /// [`crate::dag::check_rooted_dag`].
    pub fn new(graph: Digraph) -> Self {
        Self::from_shared(Arc::new(graph))
    }

    pub fn from_shared(graph: Arc<Digraph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Arc<Digraph> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Length of a shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query(v, w)?.map(|a| a.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query(v, w)?.map(|a| a.ancestor))
    }

    /// Length of a shortest ancestral path between any vertex of `vs` and any vertex of `ws`.
    pub fn length_sets(&self, vs: &[usize], ws: &[usize]) -> Result<Option<usize>> {
        Ok(self.query_sets(vs, ws)?.map(|a| a.length))
    }

    pub fn ancestor_sets(&self, vs: &[usize], ws: &[usize]) -> Result<Option<usize>> {
        Ok(self.query_sets(vs, ws)?.map(|a| a.ancestor))
    }

    pub fn query(&self, v: usize, w: usize) -> Result<Option<Ancestral>> {
        self.query_sets(&[v], &[w])
    }

    /// Ancestor and length in one pass.
    ///
    /// A vertex present in both groups is its own ancestor at length 0.
    pub fn query_sets(&self, vs: &[usize], ws: &[usize]) -> Result<Option<Ancestral>> {
        self.validate(vs, "v")?;
        self.validate(ws, "w")?;

        let fv = Frontier::from_sources(self.graph.as_ref(), vs)?;
        let fw = Frontier::from_sources(self.graph.as_ref(), ws)?;
        let best = shortest_common(&fv, &fw);

        debug!(
            "sap query |V|={} |W|={} over {} vertices -> {:?}",
            vs.len(),
            ws.len(),
            self.graph.vertex_count(),
            best
        );
        Ok(best)
    }

    /// Run independent queries, returning results in input order.
    ///
    /// With the `parallel` feature the queries are spread over the rayon pool. On failure,
    /// the error of the first failing query (by input position) is returned.
    pub fn query_batch(&self, queries: &[(Vec<usize>, Vec<usize>)]) -> Result<Vec<Option<Ancestral>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let results: Vec<Result<Option<Ancestral>>> =
                queries.par_iter().map(|(vs, ws)| self.query_sets(vs, ws)).collect();
            results.into_iter().collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|(vs, ws)| self.query_sets(vs, ws)).collect()
        }
    }

    fn validate(&self, group: &[usize], side: &str) -> Result<()> {
        if group.is_empty() {
            return Err(Error::invalid_argument(format!("vertex group `{side}` is empty")));
        }
        let n = self.graph.vertex_count();
        for &x in group {
            check_vertex(x, n)?;
        }
        Ok(())
    }
}

/// Linear scan in vertex-id order; strict `<` keeps the first minimizer.
fn shortest_common(fv: &Frontier, fw: &Frontier) -> Option<Ancestral> {
    let mut best: Option<Ancestral> = None;
    for i in 0..fv.vertex_count() {
        if let (Some(dv), Some(dw)) = (fv.distance(i), fw.distance(i)) {
            let total = dv + dw;
            if best.map_or(true, |b| total < b.length) {
                best = Some(Ancestral { ancestor: i, length: total });
            }
        }
    }
    best
}
