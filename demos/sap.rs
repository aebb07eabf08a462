//! Vertex-level SAP client.
//!
//! ```text
//! cargo run --example sap -- digraph.txt < pairs.txt
//! ```
//!
//! Loads a digraph (vertex count, edge count, then `v w` edge lines) and answers `v w` pairs
//! read from stdin.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use ancestral::{Digraph, Sap};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: sap <digraph>");
    };
    let graph = Digraph::from_file(&path).with_context(|| format!("failed to load digraph from {path}"))?;
    let sap = Sap::new(graph);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(v), Some(w)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (v, w): (usize, usize) = match (v.parse(), w.parse()) {
            (Ok(v), Ok(w)) => (v, w),
            _ => {
                eprintln!("{line}: expected two vertex ids");
                continue;
            }
        };
        match sap.query(v, w) {
            Ok(Some(a)) => println!("length = {}, ancestor = {}", a.length, a.ancestor),
            Ok(None) => println!("length = none, ancestor = none"),
            Err(e) => eprintln!("{v} {w}: {e}"),
        }
    }
    Ok(())
}
