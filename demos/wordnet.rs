//! WordNet command-line client.
//!
//! ```text
//! cargo run --example wordnet -- synsets.txt hypernyms.txt [outcast1.txt ...]
//! ```
//!
//! With outcast files, prints the outcast of the whitespace-separated nouns in each file.
//! Without, reads `nounA nounB` pairs from stdin and prints their distance and ancestor.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use ancestral::{Outcast, WordNet};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: wordnet <synsets> <hypernyms> [outcast files...]");
    }
    let wordnet = WordNet::from_files(&args[0], &args[1])
        .with_context(|| format!("failed to load wordnet from {} and {}", args[0], args[1]))?;

    if args.len() > 2 {
        let outcast = Outcast::new(&wordnet);
        for path in &args[2..] {
            let txt = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            let nouns: Vec<&str> = txt.split_whitespace().collect();
            let odd = outcast.outcast(&nouns).with_context(|| format!("outcast failed for {path}"))?;
            println!("{path}: {odd}");
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let (Some(a), Some(b)) = (words.next(), words.next()) else {
            continue;
        };
        let (Some(va), Some(vb)) = (wordnet.synsets_of(a), wordnet.synsets_of(b)) else {
            eprintln!("{a} {b}: unknown noun");
            continue;
        };
        match wordnet.sap_engine().query_sets(va, vb) {
            Ok(Some(found)) => println!(
                "distance = {}, ancestor = {}",
                found.length,
                wordnet.synset(found.ancestor).unwrap_or("none")
            ),
            Ok(None) => println!("distance = none, ancestor = none"),
            Err(e) => eprintln!("{a} {b}: {e}"),
        }
    }
    Ok(())
}
