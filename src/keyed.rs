//! Set and map units.
//!
//! Hash-based containers iterate in arbitrary order, so their units sort
//! before printing to keep the output line stable run-to-run.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io;

use itertools::Itertools;

use crate::sequences::write_elements;

pub fn btree_set_unit() -> BTreeSet<i32> {
    let mut items = BTreeSet::new();
    items.insert(1);
    items.insert(2);
    items
}

pub fn write_btree_set(out: &mut dyn io::Write) -> io::Result<()> {
    let items = btree_set_unit();
    write_elements(out, &items)
}

pub fn demo_btree_set() -> io::Result<()> {
    write_btree_set(&mut io::stdout().lock())
}

pub fn hash_set_unit() -> HashSet<i32> {
    let mut items = HashSet::new();
    items.insert(42);
    items
}

pub fn write_hash_set(out: &mut dyn io::Write) -> io::Result<()> {
    let items = hash_set_unit();
    write_elements(out, items.iter().sorted())
}

pub fn demo_hash_set() -> io::Result<()> {
    write_hash_set(&mut io::stdout().lock())
}

pub fn btree_map_unit() -> BTreeMap<String, i32> {
    let mut entries = BTreeMap::new();
    entries.insert(String::from("count"), 1);
    entries
}

pub fn write_btree_map(out: &mut dyn io::Write) -> io::Result<()> {
    for (key, value) in &btree_map_unit() {
        write!(out, "{}={} ", key, value)?;
    }
    writeln!(out)
}

pub fn demo_btree_map() -> io::Result<()> {
    write_btree_map(&mut io::stdout().lock())
}

pub fn hash_map_unit() -> HashMap<String, i32> {
    let mut entries = HashMap::new();
    entries.insert(String::from("value"), 7);
    entries
}

pub fn write_hash_map(out: &mut dyn io::Write) -> io::Result<()> {
    let entries = hash_map_unit();
    for (key, value) in entries.iter().sorted() {
        write!(out, "{}={} ", key, value)?;
    }
    writeln!(out)
}

pub fn demo_hash_map() -> io::Result<()> {
    write_hash_map(&mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_units_hold_their_literals() {
        assert!(btree_set_unit().contains(&1));
        assert!(btree_set_unit().contains(&2));
        assert!(hash_set_unit().contains(&42));
        assert_eq!(hash_set_unit().len(), 1);
    }

    #[test]
    fn map_units_hold_their_entries() {
        assert_eq!(btree_map_unit().get("count"), Some(&1));
        assert_eq!(hash_map_unit().get("value"), Some(&7));
    }

    #[test]
    fn set_output_lines_are_deterministic() {
        let mut buf = Vec::new();
        write_btree_set(&mut buf).unwrap();
        assert_eq!(buf, b"1 2 \n");

        let mut buf = Vec::new();
        write_hash_set(&mut buf).unwrap();
        assert_eq!(buf, b"42 \n");
    }

    #[test]
    fn map_output_lines_are_deterministic() {
        let mut buf = Vec::new();
        write_btree_map(&mut buf).unwrap();
        assert_eq!(buf, b"count=1 \n");

        let mut buf = Vec::new();
        write_hash_map(&mut buf).unwrap();
        assert_eq!(buf, b"value=7 \n");
    }
}
