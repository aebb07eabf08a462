//! Minimal graph adapter traits and the owned [`Digraph`] snapshot.

use crate::error::{check_vertex, Error, Result};

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// Traversals are written against this trait so that a breadth-first search never allocates
/// per visited vertex.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Immutable directed graph stored as per-vertex successor lists.
///
/// The vertex count is fixed at construction and there are no mutating methods: once built,
/// a `Digraph` can be shared freely (e.g. behind an `Arc`) between concurrent queries.
/// Successor order is preserved exactly as given; parallel edges and self-loops are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>"))]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Digraph {
    /// Build from `u -> v` edges over vertices `0..n`.
    ///
    /// Out-of-range endpoints are an error, not skipped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            check_vertex(u, n)?;
            check_vertex(v, n)?;
            adj[u].push(v);
        }
        Ok(Self { adj, edges: edges.len() })
    }

    /// Build from successor lists; `adj.len()` is the vertex count.
    pub fn from_adjacency(adj: Vec<Vec<usize>>) -> Result<Self> {
        let n = adj.len();
        let mut edges = 0usize;
        for nbrs in &adj {
            for &v in nbrs {
                check_vertex(v, n)?;
            }
            edges += nbrs.len();
        }
        Ok(Self { adj, edges })
    }

    /// Snapshot any [`Graph`] (including a `petgraph::Graph` with the `petgraph` feature).
    ///
    /// Neighbor ids are range-checked like every other constructor.
    pub fn from_graph<G: Graph>(graph: &G) -> Result<Self> {
        let adj: Vec<Vec<usize>> = (0..graph.node_count()).map(|u| graph.neighbors(u)).collect();
        Self::from_adjacency(adj)
    }

    /// Parse the plain-text digraph format: the vertex count, then the edge count, then one
    /// `v w` pair per line for each edge `v -> w`. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let n = parse_header(lines.next(), "vertex count")?;
        let m = parse_header(lines.next(), "edge count")?;

        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(m);
        let mut last_line = 0usize;
        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [v, w] = fields.as_slice() else {
                return Err(Error::parse(line_no, format!("expected `v w`, found {line:?}")));
            };
            edges.push((parse_usize(v, line_no)?, parse_usize(w, line_no)?));
            last_line = line_no;
        }
        if edges.len() != m {
            return Err(Error::parse(last_line, format!("expected {m} edges, found {}", edges.len())));
        }
        Self::from_edges(n, &edges)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Successors of `v`. Panics if `v` is out of range.
    pub fn successors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Vertices with no outgoing edges, in ascending order.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.adj.len()).filter(|&v| self.adj[v].is_empty()).collect()
    }

    /// The same vertices with every edge flipped.
    pub fn reverse(&self) -> Self {
        let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.adj.len()];
        for (u, nbrs) in self.adj.iter().enumerate() {
            for &v in nbrs {
                rev[v].push(u);
            }
        }
        Self { adj: rev, edges: self.edges }
    }
}

fn parse_header(line: Option<(usize, &str)>, what: &str) -> Result<usize> {
    let (line_no, line) = line.ok_or_else(|| Error::parse(0, format!("missing {what}")))?;
    parse_usize(line, line_no)
}

fn parse_usize(field: &str, line_no: usize) -> Result<usize> {
    field
        .parse::<usize>()
        .map_err(|e| Error::parse(line_no, format!("invalid integer {field:?}: {e}")))
}

impl TryFrom<Vec<Vec<usize>>> for Digraph {
    type Error = Error;

    fn try_from(adj: Vec<Vec<usize>>) -> Result<Self> {
        Self::from_adjacency(adj)
    }
}

impl From<Digraph> for Vec<Vec<usize>> {
    fn from(g: Digraph) -> Self {
        g.adj
    }
}

impl Graph for Digraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj[node].clone()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }
}

impl GraphRef for Digraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors_ref(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> Graph for petgraph::Graph<N, E, petgraph::Directed, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_keeps_order_and_counts() {
        // 1 -> 0, 2 -> 0, 2 -> 1
        let g = Digraph::from_edges(3, &[(1, 0), (2, 0), (2, 1)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.successors(2), &[0, 1]);
        assert_eq!(g.roots(), vec![0]);
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        let err = Digraph::from_edges(2, &[(0, 1), (1, 5)]).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 5, vertex_count: 2 }));
    }

    #[test]
    fn from_adjacency_matches_from_edges() {
        let a = Digraph::from_adjacency(vec![vec![], vec![0], vec![0, 1]]).unwrap();
        let b = Digraph::from_edges(3, &[(1, 0), (2, 0), (2, 1)]).unwrap();
        assert_eq!(a, b);
        assert!(Digraph::from_adjacency(vec![vec![3]]).is_err());
    }

    #[test]
    fn reverse_flips_edges() {
        let g = Digraph::from_edges(3, &[(1, 0), (2, 0)]).unwrap();
        let r = g.reverse();
        assert_eq!(r.successors(0), &[1, 2]);
        assert!(r.successors(1).is_empty());
        assert_eq!(r.edge_count(), 2);
    }

    #[test]
    fn from_graph_snapshots_trait_view() {
        let g = Digraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let copy = Digraph::from_graph(&g).unwrap();
        assert_eq!(copy, g);
    }

    struct DanglingNeighbor;

    impl Graph for DanglingNeighbor {
        fn node_count(&self) -> usize {
            2
        }
        fn neighbors(&self, node: usize) -> Vec<usize> {
            if node == 1 { vec![5] } else { Vec::new() }
        }
    }

    #[test]
    fn from_graph_rejects_out_of_range_neighbor() {
        let err = Digraph::from_graph(&DanglingNeighbor).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 5, vertex_count: 2 }));
    }

    #[test]
    fn parse_text_digraph() {
        let text = "4\n3\n1 0\n\n2 0\n  3 1 \n";
        let g = Digraph::parse(text).unwrap();
        assert_eq!(g, Digraph::from_edges(4, &[(1, 0), (2, 0), (3, 1)]).unwrap());
        assert_eq!(Digraph::parse("0\n0\n").unwrap().vertex_count(), 0);
    }

    #[test]
    fn parse_rejects_bad_header() {
        let err = Digraph::parse("four\n1\n1 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");

        let err = Digraph::parse("4\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err}");
    }

    #[test]
    fn parse_rejects_malformed_edges() {
        let err = Digraph::parse("3\n2\n1 0\n2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }), "{err}");

        let err = Digraph::parse("3\n2\n1 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn parse_rejects_out_of_range_endpoint() {
        let err = Digraph::parse("3\n2\n1 0\n2 7\n").unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 7, vertex_count: 3 }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_ranges() {
        let g: Digraph = serde_json::from_str("[[], [0], [0, 1]]").unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(serde_json::to_string(&g).unwrap(), "[[],[0],[0,1]]");
        assert!(serde_json::from_str::<Digraph>("[[], [4]]").is_err());
    }

    #[cfg(feature = "petgraph")]
    #[test]
    fn petgraph_adapter_snapshot() {
        use petgraph::prelude::*;
        let mut pg: DiGraph<(), ()> = DiGraph::new();
        let a = pg.add_node(());
        let b = pg.add_node(());
        let c = pg.add_node(());
        pg.add_edge(b, a, ());
        pg.add_edge(c, a, ());
        let g = Digraph::from_graph(&pg).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.successors(b.index()), &[a.index()]);
        assert_eq!(g.roots(), vec![a.index()]);
    }
}
