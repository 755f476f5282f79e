use shared::domain::{MovieId, MovieRecord};

/// Snapshot of the collection as of the last successful list fetch.
///
/// The only way to change it is [`MovieCache::replace`]; there is no
/// per-record insert, patch or removal.
#[derive(Debug, Default, Clone)]
pub struct MovieCache {
    records: Vec<MovieRecord>,
}

impl MovieCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh snapshot, discarding the previous one. Last write wins.
    pub fn replace(&mut self, records: Vec<MovieRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn find(&self, id: &MovieId) -> Option<&MovieRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Records whose title or genre contains `term`, ignoring case and
    /// surrounding whitespace. An empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&MovieRecord> {
        let needle = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
