use rootwalk_domain::RecordMap;
use rustc_hash::FxHashMap;

/// Record maps of names already looked up in this process.
///
/// Entries are never evicted or refreshed.
#[derive(Debug, Default)]
pub struct NameCache {
    entries: FxHashMap<String, RecordMap>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&RecordMap> {
        self.entries.get(name)
    }

    pub fn put(&mut self, name: impl Into<String>, records: RecordMap) {
        self.entries.insert(name.into(), records);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
