// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, TableKind};
use crate::error::{Result, ScrapeError};
use crate::store::DataSet;

/// Where finished tables go. One call per table.
pub trait Sink {
    fn write_table(&mut self, table: TableKind, data: &DataSet) -> Result<PathBuf>;
}

/// Writes `<out_dir>/<table name>.<csv|tsv>`, overwriting.
pub struct DirSink {
    export: ExportOptions,
}

impl DirSink {
    pub fn new(export: ExportOptions) -> Self {
        Self { export }
    }
}

impl Sink for DirSink {
    fn write_table(&mut self, table: TableKind, data: &DataSet) -> Result<PathBuf> {
        let path = self.export.path_for(table);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }

        let file = fs::File::create(&path)?;
        write_delimited(file, data, &self.export)?;
        logf!("Export: {} rows → {}", data.rows.len(), path.display());
        Ok(path)
    }
}

/// Same bytes a `DirSink` would write, as a string (clipboard copy).
pub fn to_export_string(data: &DataSet, export: &ExportOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_delimited(&mut buf, data, export)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_delimited<W: Write>(out: W, data: &DataSet, export: &ExportOptions) -> Result<()> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .flexible(true)
        .from_writer(out);

    if export.include_headers {
        w.write_record(&data.headers)?;
    }
    for row in &data.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;

    fn sample() -> DataSet {
        DataSet {
            headers: vec![s!("Team"), s!("Wins")],
            rows: vec![vec![s!("Alpha"), s!("2")], vec![s!("Bravo, B"), s!("1")]],
        }
    }

    #[test]
    fn csv_quotes_embedded_commas() {
        let export = ExportOptions::default();
        let text = to_export_string(&sample(), &export).unwrap();
        assert_eq!(text, "Team,Wins\nAlpha,2\n\"Bravo, B\",1\n");
    }

    #[test]
    fn tsv_without_headers() {
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Tsv;
        export.include_headers = false;
        let text = to_export_string(&sample(), &export).unwrap();
        assert_eq!(text, "Alpha\t2\nBravo, B\t1\n");
    }

    #[test]
    fn dir_sink_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut export = ExportOptions::default();
        export.set_out_dir(dir.path().join("nested").to_string_lossy().as_ref());

        let mut sink = DirSink::new(export);
        let path = sink.write_table(TableKind::Teams, &sample()).unwrap();
        assert!(path.ends_with("teams.csv"));
        assert!(fs::read_to_string(path).unwrap().starts_with("Team,Wins\n"));
    }

    #[test]
    fn file_in_place_of_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        fs::write(&blocker, "x").unwrap();
        assert!(matches!(ensure_directory(&blocker), Err(ScrapeError::NotADirectory(_))));
    }
}
