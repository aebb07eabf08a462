use std::path::PathBuf;

use ancestral::{Error, Outcast, WordNet};

const SYNSETS: &str = "\
0,entity,that which is perceived to have its own distinct existence
1,physical_entity,an entity that has physical existence
2,abstraction abstract_entity,a general concept formed by extracting common features
3,organism being,a living thing
4,mammal,any warm-blooded vertebrate
5,dog domestic_dog Canis_familiaris,a member of the genus Canis
6,cat true_cat,feline mammal
7,horse Equus_caballus,solid-hoofed herbivorous quadruped
8,table tabular_array,a set of data arranged in rows and columns
";

const HYPERNYMS: &str = "\
1,0
2,0
3,1
4,3
5,4
6,4
7,4
8,2
";

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ancestral-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_from_files() {
    let s = write_temp("synsets.txt", SYNSETS);
    let h = write_temp("hypernyms.txt", HYPERNYMS);
    let wn = WordNet::from_files(&s, &h).unwrap();
    assert!(wn.is_noun("Canis_familiaris"));
    assert_eq!(wn.sap("dog", "horse").unwrap(), Some("mammal"));
    assert_eq!(wn.distance("dog", "table").unwrap(), Some(6));
    let _ = std::fs::remove_file(s);
    let _ = std::fs::remove_file(h);
}

#[test]
fn missing_file_is_io_error() {
    let missing = std::env::temp_dir().join("ancestral-definitely-missing-synsets.txt");
    assert!(matches!(WordNet::from_files(&missing, &missing), Err(Error::Io(_))));
}

#[test]
fn outcast_picks_the_unrelated_noun() {
    let wn = WordNet::parse(SYNSETS, HYPERNYMS).unwrap();
    let oc = Outcast::new(&wn);
    // dog, cat, horse are 2 apart pairwise; table is 6 away from each.
    assert_eq!(oc.outcast(&["horse", "table", "cat", "dog"]).unwrap(), "table");
    assert_eq!(oc.outcast(&["dog", "cat", "horse", "abstraction"]).unwrap(), "abstraction");
}

#[test]
fn every_noun_pair_is_symmetric() {
    let wn = WordNet::parse(SYNSETS, HYPERNYMS).unwrap();
    let nouns: Vec<&str> = wn.nouns().collect();
    for &a in &nouns {
        for &b in &nouns {
            assert_eq!(wn.distance(a, b).unwrap(), wn.distance(b, a).unwrap(), "{a} / {b}");
            assert_eq!(wn.sap(a, b).unwrap(), wn.sap(b, a).unwrap(), "{a} / {b}");
        }
    }
}

#[test]
fn one_set_query_gives_distance_and_ancestor() {
    let wn = WordNet::parse(SYNSETS, HYPERNYMS).unwrap();
    for (a, b) in [("dog", "horse"), ("cat", "table"), ("Canis_familiaris", "abstract_entity")] {
        let found = wn
            .sap_engine()
            .query_sets(wn.synsets_of(a).unwrap(), wn.synsets_of(b).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(Some(found.length), wn.distance(a, b).unwrap());
        assert_eq!(wn.synset(found.ancestor), wn.sap(a, b).unwrap());
    }
}
