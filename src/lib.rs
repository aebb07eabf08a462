//! # ancestral
//!
//! Shortest ancestral path (SAP) queries over directed acyclic graphs such as the WordNet
//! hypernym hierarchy.
//!
//! - [`Sap`]: the query engine (`length` / `ancestor`, single vertices or vertex groups)
//! - [`Frontier`]: multi-source BFS distances, one per query side
//! - [`WordNet`] / [`Outcast`]: noun-level clients built on the engine
//!
//! Edges are interpreted as `u -> v` ("u is-a v"); ancestors are reached by following edges.

pub mod dag;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod wordnet;

pub use dag::{check_rooted_dag, find_cycle};
pub use error::{Error, Result};
pub use frontier::Frontier;
pub use graph::{Digraph, Graph, GraphRef};
pub use outcast::Outcast;
pub use sap::{Ancestral, Sap};
pub use wordnet::{WordNet, WordNetConfig};
