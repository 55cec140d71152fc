// src/store.rs
use std::{fs, path::{Path, PathBuf}};

use crate::config::{consts::STORE_DIR, options::TableKind};
use crate::error::Result;

/// A table as plain strings: what sinks write and what the GUI shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn store_path(root: &Path, table: TableKind) -> PathBuf {
    root.join(join!(table.name(), ".csv"))
}

/// Default cache root (`./.store`).
pub fn default_root() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

/// Cache one table as CSV with a header row.
pub fn save_dataset(root: &Path, table: TableKind, ds: &DataSet) -> Result<()> {
    fs::create_dir_all(root)?;
    let mut w = csv::Writer::from_path(store_path(root, table))?;
    w.write_record(&ds.headers)?;
    for row in &ds.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Last cached copy of a table, if there is one.
pub fn load_dataset(root: &Path, table: TableKind) -> Result<Option<DataSet>> {
    let path = store_path(root, table);
    if !path.exists() {
        return Ok(None);
    }

    let mut r = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;
    let headers = r.headers()?.iter().map(|h| s!(h)).collect();
    let mut rows = Vec::new();
    for rec in r.records() {
        rows.push(rec?.iter().map(|c| s!(c)).collect());
    }
    Ok(Some(DataSet { headers, rows }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_round_trip_keeps_quoting() {
        let dir = tempfile::tempdir().unwrap();
        let ds = DataSet {
            headers: vec![s!("team"), s!("players")],
            rows: vec![vec![s!("Alpha, Inc."), s!("Ace; \"Bolt\"")]],
        };
        save_dataset(dir.path(), TableKind::Rosters, &ds).unwrap();
        assert_eq!(load_dataset(dir.path(), TableKind::Rosters).unwrap(), Some(ds));
    }

    #[test]
    fn missing_cache_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_dataset(dir.path(), TableKind::Teams).unwrap(), None);
    }
}
