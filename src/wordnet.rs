//! WordNet: nouns, synsets and the hypernym hierarchy.
//!
//! Input is two CSV documents:
//! - synsets, one per line: `id,synonym1 synonym2 ...,gloss`; ids are dense and ascending
//!   (the record on line `k` of the data has id `k`, blank lines ignored)
//! - hypernyms: `id,hypernym1,hypernym2,...`, giving edges `id -> hypernymK`
//!
//! A noun can belong to several synsets, so noun-level queries are set-valued SAP queries
//! over all synsets of each noun.

use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::dag::check_rooted_dag;
use crate::error::{Error, Result};
use crate::graph::Digraph;
use crate::sap::Sap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordNetConfig {
    /// Reject hypernym graphs that are cyclic or do not have exactly one root.
    pub require_rooted: bool,
    pub field_separator: char,
    /// Separator between the synonyms of one synset.
    pub synonym_separator: char,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self { require_rooted: true, field_separator: ',', synonym_separator: ' ' }
    }
}

#[derive(Debug, Clone)]
pub struct WordNet {
    sap: Sap,
    nouns: HashMap<String, Vec<usize>>,
    synsets: Vec<String>,
}

impl WordNet {
    pub fn parse(synsets: &str, hypernyms: &str) -> Result<Self> {
        Self::with_config(synsets, hypernyms, WordNetConfig::default())
    }

    pub fn from_files(synsets: impl AsRef<Path>, hypernyms: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(synsets)?;
        let h = std::fs::read_to_string(hypernyms)?;
        Self::parse(&s, &h)
    }

    pub fn with_config(synsets: &str, hypernyms: &str, config: WordNetConfig) -> Result<Self> {
        let (synsets, nouns) = parse_synsets(synsets, config)?;
        let edges = parse_hypernyms(hypernyms, config)?;
        let graph = Digraph::from_edges(synsets.len(), &edges)?;
        if config.require_rooted {
            check_rooted_dag(&graph)?;
        }

        info!(
            "loaded wordnet: {} synsets, {} nouns, {} hypernym edges",
            synsets.len(),
            nouns.len(),
            graph.edge_count()
        );
        Ok(Self { sap: Sap::new(graph), nouns, synsets })
    }

    /// All distinct nouns, in unspecified order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.nouns.keys().map(String::as_str)
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Synonym field of synset `id`.
    pub fn synset(&self, id: usize) -> Option<&str> {
        self.synsets.get(id).map(String::as_str)
    }

    /// Ids of every synset containing `noun`, ascending.
    pub fn synsets_of(&self, noun: &str) -> Option<&[usize]> {
        self.nouns.get(noun).map(Vec::as_slice)
    }

    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Length of a shortest ancestral path between any synset of `a` and any synset of `b`.
    ///
    /// Fails with `UnknownNoun` if either noun is missing (the first missing one is named).
    pub fn distance(&self, a: &str, b: &str) -> Result<Option<usize>> {
        let (va, vb) = (self.lookup(a)?, self.lookup(b)?);
        self.sap.length_sets(va, vb)
    }

    /// Synset string of the common ancestor on a shortest ancestral path.
    pub fn sap(&self, a: &str, b: &str) -> Result<Option<&str>> {
        let (va, vb) = (self.lookup(a)?, self.lookup(b)?);
        Ok(self.sap.ancestor_sets(va, vb)?.and_then(|id| self.synset(id)))
    }

    fn lookup(&self, noun: &str) -> Result<&[usize]> {
        self.synsets_of(noun).ok_or_else(|| Error::UnknownNoun(noun.to_string()))
    }
}

type SynsetTable = (Vec<String>, HashMap<String, Vec<usize>>);

fn parse_synsets(text: &str, config: WordNetConfig) -> Result<SynsetTable> {
    let mut synsets: Vec<String> = Vec::new();
    let mut nouns: HashMap<String, Vec<usize>> = HashMap::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, config.field_separator);
        let id = parse_id(fields.next().unwrap_or(""), line_no)?;
        let expected = synsets.len();
        if id != expected {
            return Err(Error::parse(line_no, format!("expected synset id {expected}, found {id}")));
        }
        let synonyms = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::parse(line_no, "missing synonym field"))?;

        for noun in synonyms.split(config.synonym_separator).filter(|s| !s.is_empty()) {
            let ids = nouns.entry(noun.to_string()).or_default();
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        synsets.push(synonyms.to_string());
    }

    Ok((synsets, nouns))
}

fn parse_hypernyms(text: &str, config: WordNetConfig) -> Result<Vec<(usize, usize)>> {
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(config.field_separator);
        let from = parse_id(fields.next().unwrap_or(""), line_no)?;
        for field in fields {
            // Tolerate a trailing separator.
            if field.trim().is_empty() {
                continue;
            }
            edges.push((from, parse_id(field, line_no)?));
        }
    }
    Ok(edges)
}

fn parse_id(field: &str, line_no: usize) -> Result<usize> {
    let field = field.trim();
    field
        .parse::<usize>()
        .map_err(|e| Error::parse(line_no, format!("invalid synset id {field:?}: {e}")))
}
