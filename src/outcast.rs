//! Outcast detection: the noun least related to the rest of its group.

use log::debug;

use crate::error::{Error, Result};
use crate::wordnet::WordNet;

#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun whose summed distance to every other noun in `nouns` is largest.
    ///
    /// Ties go to the noun that appears first. Each unordered pair is queried once, as one
    /// batch (parallel with the `parallel` feature). A pair with no common ancestor adds 0.
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> Result<&'n str> {
        if nouns.is_empty() {
            return Err(Error::invalid_argument("noun list is empty"));
        }
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(nouns.len());
        for &noun in nouns {
            let ids = self
                .wordnet
                .synsets_of(noun)
                .ok_or_else(|| Error::UnknownNoun(noun.to_string()))?;
            groups.push(ids.to_vec());
        }

        let mut pairs: Vec<(usize, usize)> = Vec::new();
        let mut queries: Vec<(Vec<usize>, Vec<usize>)> = Vec::new();
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                pairs.push((i, j));
                queries.push((groups[i].clone(), groups[j].clone()));
            }
        }
        let results = self.wordnet.sap_engine().query_batch(&queries)?;

        let mut sums = vec![0usize; nouns.len()];
        for (&(i, j), res) in pairs.iter().zip(&results) {
            let d = res.map_or(0, |a| a.length);
            sums[i] += d;
            sums[j] += d;
        }

        let mut best = 0usize;
        for (i, &s) in sums.iter().enumerate() {
            if s > sums[best] {
                best = i;
            }
        }
        debug!("outcast over {} nouns: sums={:?} -> {:?}", nouns.len(), sums, nouns[best]);
        Ok(nouns[best])
    }
}
