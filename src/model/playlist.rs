use super::Record;
use crate::error::{ExportError, Result};
use std::collections::BTreeSet;

/// Name of the column rewritten by [`Playlist::renumerate`]
pub const ORDER_COLUMN: &str = "order";

/// Ordered sequence of records parsed from one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    /// Columns that may be requested from this playlist
    columns: Vec<String>,

    /// Records in source-file order
    records: Vec<Record>,
}

impl Playlist {
    /// Create a playlist whose available columns are fixed up front
    pub fn with_columns<S: AsRef<str>>(columns: &[S], records: Vec<Record>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            records,
        }
    }

    /// Create a playlist whose available columns are the keys of the first record
    pub fn from_records(records: Vec<Record>) -> Self {
        let columns = records
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default();
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records in this playlist
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project every record onto `requested`, in requested order
    ///
    /// Fails with [`ExportError::UnknownColumn`] naming every requested column
    /// this playlist does not offer. Duplicate names are kept once.
    pub fn trim<S: AsRef<str>>(self, requested: &[S]) -> Result<Playlist> {
        let mut seen = BTreeSet::new();
        let requested: Vec<String> = requested
            .iter()
            .map(|c| c.as_ref().to_string())
            .filter(|c| seen.insert(c.clone()))
            .collect();

        let missing: BTreeSet<&String> = requested
            .iter()
            .filter(|c| !self.columns.contains(c))
            .collect();
        if !missing.is_empty() {
            return Err(ExportError::UnknownColumn {
                missing: missing.into_iter().cloned().collect(),
            });
        }

        let records: Vec<Record> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                requested
                    .iter()
                    .map(|column| {
                        let value = record.get(column).unwrap_or_else(|| {
                            log::warn!("Record {} has no {:?} value, leaving it empty", i + 1, column);
                            ""
                        });
                        (column.clone(), value.to_string())
                    })
                    .collect::<Record>()
            })
            .collect();

        log::debug!("Trimmed {} records to {:?}", self.records.len(), requested);
        Ok(Playlist {
            columns: requested,
            records,
        })
    }

    /// Rewrite the `order` column as 1-based, zero-padded positions
    ///
    /// Does nothing unless `selection` includes `order`.
    pub fn renumerate<S: AsRef<str>>(&mut self, selection: &[S]) {
        if !selection.iter().any(|c| c.as_ref() == ORDER_COLUMN) {
            return;
        }

        let width = order_width(self.records.len());
        for (i, record) in self.records.iter_mut().enumerate() {
            record.insert(ORDER_COLUMN, format!("{:0width$}", i + 1, width = width));
        }
    }
}

/// Digits needed to print `count`, so 9 -> 1 and 10 -> 2
pub fn order_width(count: usize) -> usize {
    count.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(order: &str, title: &str, artist: &str) -> Record {
        [("order", order), ("title", title), ("artist", artist)]
            .into_iter()
            .collect()
    }

    fn playlist_of(n: usize) -> Playlist {
        let records = (0..n).map(|i| song("x", &format!("t{}", i), "a")).collect();
        Playlist::with_columns(&["order", "title", "artist"], records)
    }

    #[test]
    fn test_trim_projects_in_requested_order() {
        let playlist = Playlist::from_records(vec![song("7", "Song", "Someone")]);
        let trimmed = playlist.trim(&["artist", "title"]).unwrap();

        let record = &trimmed.records()[0];
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["artist", "title"]);
        assert_eq!(trimmed.columns(), ["artist", "title"]);
    }

    #[test]
    fn test_trim_to_nothing() {
        let trimmed = playlist_of(2).trim::<&str>(&[]).unwrap();
        assert_eq!(trimmed.len(), 2);
        assert!(trimmed.records().iter().all(Record::is_empty));
    }

    #[test]
    fn test_trim_is_idempotent() {
        let once = playlist_of(3).trim(&["title", "order"]).unwrap();
        let twice = once.clone().trim(&["title", "order"]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_names_exactly_the_missing_columns() {
        let err = playlist_of(1)
            .trim(&["title", "missing", "artist", "bogus"])
            .unwrap_err();

        match err {
            ExportError::UnknownColumn { missing } => assert_eq!(missing, vec!["bogus", "missing"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_trim_fills_ragged_records() {
        let mut short = Record::new();
        short.insert("title", "Only title");
        let playlist = Playlist::from_records(vec![song("1", "Song", "Someone"), short]);

        let trimmed = playlist.trim(&["title", "artist"]).unwrap();
        assert_eq!(trimmed.records()[1].get("artist"), Some(""));
    }

    #[test]
    fn test_trim_collapses_duplicate_columns() {
        let trimmed = playlist_of(1).trim(&["title", "title"]).unwrap();
        assert_eq!(trimmed.columns(), ["title"]);
    }

    #[test]
    fn test_order_width() {
        assert_eq!(order_width(1), 1);
        assert_eq!(order_width(9), 1);
        assert_eq!(order_width(10), 2);
        assert_eq!(order_width(99), 2);
        assert_eq!(order_width(100), 3);
    }

    #[test]
    fn test_renumerate_single_digit() {
        let mut playlist = playlist_of(9);
        playlist.renumerate(&["order", "title"]);

        let orders: Vec<_> = playlist.records().iter().map(|r| r.get("order").unwrap()).collect();
        assert_eq!(orders, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_renumerate_pads_at_power_of_ten() {
        let mut playlist = playlist_of(10);
        playlist.renumerate(&["order"]);

        let orders: Vec<_> = playlist.records().iter().map(|r| r.get("order").unwrap()).collect();
        assert_eq!(orders.first(), Some(&"01"));
        assert_eq!(orders.last(), Some(&"10"));
        assert!(orders.iter().all(|o| o.len() == 2));
    }

    #[test]
    fn test_renumerate_without_order_is_untouched() {
        let mut playlist = playlist_of(3);
        let before = playlist.clone();
        playlist.renumerate(&["title", "artist"]);
        assert_eq!(playlist, before);
    }
}
