use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// In-memory cache of embedding vectors, keyed by a hash of the input text
/// and the model that produced the vector.
///
/// An explicit value passed to whoever needs it, never a process-wide
/// singleton; callers decide its lifetime and can inspect or clear it.
#[derive(Debug, Default, Clone)]
pub struct EmbeddingCache {
    entries: HashMap<String, Vec<f32>>,
}

impl EmbeddingCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(text: &str, model_id: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hasher.update(b":");
        hasher.update(model_id.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Look up a previously cached vector
    #[must_use]
    pub fn get(&self, text: &str, model_id: &str) -> Option<&Vec<f32>> {
        self.entries.get(&Self::key(text, model_id))
    }

    /// Cache a vector for a text/model pair
    pub fn insert(&mut self, text: &str, model_id: &str, vector: Vec<f32>) {
        self.entries.insert(Self::key(text, model_id), vector);
    }

    /// Number of cached vectors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached vectors
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_after_insert() {
        let mut cache = EmbeddingCache::new();
        assert!(cache.get("hello", "model-a").is_none());

        cache.insert("hello", "model-a", vec![1.0, 2.0]);
        assert_eq!(cache.get("hello", "model-a"), Some(&vec![1.0, 2.0]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_model_id_part_of_key() {
        let mut cache = EmbeddingCache::new();
        cache.insert("hello", "model-a", vec![1.0]);

        assert!(cache.get("hello", "model-b").is_none());
    }

    #[test]
    fn test_clear() {
        let mut cache = EmbeddingCache::new();
        cache.insert("a", "m", vec![0.0]);
        cache.insert("b", "m", vec![0.0]);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
