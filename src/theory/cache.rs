//! Session-lifetime document cache.
//!
//! Append-only and unbounded: the document population is small and finite,
//! and writes are idempotent per key, so interleaved background fetches
//! cannot corrupt it.

use std::collections::HashMap;
use std::sync::Mutex;

use super::TheoryDocument;

#[derive(Default)]
pub struct DocumentCache {
    inner: Mutex<HashMap<String, TheoryDocument>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, TheoryDocument>> {
        // A poisoned lock just means a fetch thread panicked mid-insert;
        // the map itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, name: &str) -> Option<TheoryDocument> {
        let hit = self.lock().get(name).cloned();
        match hit {
            Some(doc) => {
                log::debug!("cache HIT: {}", name);
                Some(doc)
            }
            None => {
                log::debug!("cache MISS: {}", name);
                None
            }
        }
    }

    pub fn insert(&self, name: &str, doc: TheoryDocument) {
        self.lock().insert(name.to_string(), doc);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_get() {
        let cache = DocumentCache::new();
        assert!(cache.get("IIT").is_none());

        let mut doc = TheoryDocument::default();
        doc.id_and_class.theory_title = "Integrated Information Theory (IIT)".into();
        cache.insert("IIT", doc.clone());

        assert_eq!(cache.get("IIT"), Some(doc));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let cache = DocumentCache::new();
        let doc = TheoryDocument::default();
        cache.insert("Seth", doc.clone());
        cache.insert("Seth", doc);
        assert_eq!(cache.len(), 1);
    }
}
