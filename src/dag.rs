//! Rooted-DAG validation.
//!
//! A hypernym hierarchy must be acyclic and have exactly one vertex without outgoing edges
//! (the root every other vertex eventually reaches). The SAP engine itself never re-checks
//! this; graph loaders call [`check_rooted_dag`] once at construction time.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Return a vertex lying on a directed cycle, or `None` if the graph is acyclic.
///
/// Sinks are peeled repeatedly (Kahn's algorithm on the reversed graph). Every vertex that
/// survives the peeling has a surviving successor, so walking surviving successors for `n`
/// steps is guaranteed to end on a cycle.
pub fn find_cycle<G: Graph>(graph: &G) -> Option<usize> {
    let n = graph.node_count();
    let adj: Vec<Vec<usize>> = (0..n).map(|u| graph.neighbors(u)).collect();

    let mut rev: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_deg = vec![0usize; n];
    for (u, nbrs) in adj.iter().enumerate() {
        out_deg[u] = nbrs.len();
        for &v in nbrs {
            rev[v].push(u);
        }
    }

    let mut peeled = vec![false; n];
    let mut q: Vec<usize> = (0..n).filter(|&u| out_deg[u] == 0).collect();
    for &u in &q {
        peeled[u] = true;
    }
    let mut head = 0usize;
    while head < q.len() {
        let v = q[head];
        head += 1;
        for &u in &rev[v] {
            out_deg[u] -= 1;
            if out_deg[u] == 0 {
                peeled[u] = true;
                q.push(u);
            }
        }
    }

    if q.len() == n {
        return None;
    }

    let mut cur = (0..n).find(|&u| !peeled[u])?;
    for _ in 0..n {
        cur = *adj[cur].iter().find(|&&v| !peeled[v])?;
    }
    Some(cur)
}

/// Check that `graph` is acyclic with a single root; returns the root.
pub fn check_rooted_dag<G: Graph>(graph: &G) -> Result<usize> {
    if let Some(vertex) = find_cycle(graph) {
        return Err(Error::Cycle { vertex });
    }
    let roots: Vec<usize> = (0..graph.node_count()).filter(|&u| graph.out_degree(u) == 0).collect();
    match roots.as_slice() {
        [root] => Ok(*root),
        _ => Err(Error::NotRooted { roots: roots.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    #[test]
    fn tree_is_rooted_dag() {
        let g = Digraph::from_edges(4, &[(1, 0), (2, 0), (3, 1), (3, 2)]).unwrap();
        assert_eq!(find_cycle(&g), None);
        assert_eq!(check_rooted_dag(&g).unwrap(), 0);
    }

    #[test]
    fn cycle_vertex_is_on_the_cycle() {
        // 4 -> 0 -> 1 -> 2 -> 0, 2 -> 3
        let g = Digraph::from_edges(5, &[(4, 0), (0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let v = find_cycle(&g).unwrap();
        assert!([0, 1, 2].contains(&v), "v={v}");
        assert!(matches!(check_rooted_dag(&g), Err(Error::Cycle { .. })));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = Digraph::from_edges(2, &[(1, 1), (1, 0)]).unwrap();
        assert_eq!(find_cycle(&g), Some(1));
    }

    #[test]
    fn parallel_edges_are_not_a_cycle() {
        let g = Digraph::from_edges(2, &[(1, 0), (1, 0)]).unwrap();
        assert_eq!(check_rooted_dag(&g).unwrap(), 0);
    }

    #[test]
    fn two_roots_are_rejected() {
        // 1 -> 0, 2 -> 0, 3 isolated
        let g = Digraph::from_edges(4, &[(1, 0), (2, 0)]).unwrap();
        assert!(matches!(check_rooted_dag(&g), Err(Error::NotRooted { roots: 2 })));
    }

    #[test]
    fn empty_graph_has_no_root() {
        let g = Digraph::from_edges(0, &[]).unwrap();
        assert!(matches!(check_rooted_dag(&g), Err(Error::NotRooted { roots: 0 })));
    }
}
