//! Tab-separated word table parsing
//!
//! The first row holds column titles, optionally suffixed with `@bucket`
//! (`FirstName@female`). Several columns may share a title; their words are
//! merged into one list. Empty cells are skipped.

use thiserror::Error;

use super::WordLists;

/// Which filtered contexts a column feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Female,
    Male,
    /// Unmarked, `@other`, or any unknown bucket: feeds both
    Shared,
}

impl Bucket {
    fn from_suffix(suffix: Option<&str>) -> Self {
        match suffix {
            Some("female") => Bucket::Female,
            Some("male") => Bucket::Male,
            _ => Bucket::Shared,
        }
    }

    /// Whether words of this bucket belong in the `filter` list
    fn feeds(self, filter: Bucket) -> bool {
        self == Bucket::Shared || self == filter
    }
}

/// A word table column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub bucket: Bucket,
}

/// Word table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordTableError {
    #[error("word table has no header row")]
    MissingHeader,

    #[error("row {row} has {found} cells but the header has {expected} columns")]
    RowTooWide {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Parsed word table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl WordTable {
    /// Parse tab-separated text
    ///
    /// Rows are separated by CRLF (bare LF is accepted). Blank lines are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, WordTableError> {
        let mut lines = text.lines().filter(|line| !line.is_empty());

        let header = lines.next().ok_or(WordTableError::MissingHeader)?;
        let columns: Vec<Column> = header
            .split('\t')
            .map(|title| {
                let (name, suffix) = match title.split_once('@') {
                    Some((name, bucket)) => (name, Some(bucket)),
                    None => (title, None),
                };
                Column {
                    name: name.to_string(),
                    bucket: Bucket::from_suffix(suffix),
                }
            })
            .collect();

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let cells: Vec<String> = line.split('\t').map(str::to_string).collect();
            if cells.len() > columns.len() {
                return Err(WordTableError::RowTooWide {
                    row: i + 2,
                    found: cells.len(),
                    expected: columns.len(),
                });
            }
            rows.push(cells);
        }

        tracing::debug!(
            columns = columns.len(),
            rows = rows.len(),
            "parsed word table"
        );
        Ok(Self { columns, rows })
    }

    /// Column headers in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build word lists, keeping only columns that feed `filter`
    ///
    /// `None` keeps every column. Every title gets an entry, even when the
    /// filter leaves it empty. Words appear in row-major order.
    pub fn lists_for(&self, filter: Option<Bucket>) -> WordLists {
        let mut lists: WordLists = self
            .columns
            .iter()
            .filter(|c| !c.name.is_empty())
            .map(|c| (c.name.clone(), Vec::new()))
            .collect();

        for row in &self.rows {
            for (cell, column) in row.iter().zip(&self.columns) {
                if cell.is_empty() || column.name.is_empty() {
                    continue;
                }
                if filter.is_some_and(|f| !column.bucket.feeds(f)) {
                    continue;
                }
                if let Some(list) = lists.get_mut(&column.name) {
                    list.push(cell.clone());
                }
            }
        }
        lists
    }
}
