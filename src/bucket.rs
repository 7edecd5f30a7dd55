use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// The chain of entries sharing one slot. New entries go to the front, so
/// the most recent insert is scanned first.
#[derive(Debug, Clone)]
pub struct Bucket<V> {
    entries: VecDeque<Entry<V>>,
}

impl<V> Bucket<V> {
    pub fn with_entry(key: String, value: V) -> Bucket<V> {
        let mut entries = VecDeque::with_capacity(1);
        entries.push_back(Entry { key, value });
        Bucket { entries }
    }

    pub fn push_front(&mut self, key: String, value: V) {
        self.entries.push_front(Entry { key, value });
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let pos = self.position(key)?;
        self.entries.remove(pos)
    }

    // Arbitrary removal takes the front of the chain.
    pub fn pop_any(&mut self) -> Option<Entry<V>> {
        self.entries.pop_front()
    }

    pub fn first(&self) -> Option<&Entry<V>> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<V>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = Entry<V>> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::bucket::*;

    fn keys<V>(bucket: &Bucket<V>) -> Vec<&str> {
        bucket.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn newest_entry_is_scanned_first() {
        let mut bucket = Bucket::with_entry(String::from("a"), 1);
        bucket.push_front(String::from("k"), 2);
        bucket.push_front(String::from("u"), 3);
        assert_eq!(keys(&bucket), vec!["u", "k", "a"]);
        assert_eq!(bucket.first().map(|e| e.value), Some(3));
    }

    #[test]
    fn remove_by_key_keeps_order() {
        let mut bucket = Bucket::with_entry(String::from("a"), 1);
        bucket.push_front(String::from("k"), 2);
        bucket.push_front(String::from("u"), 3);
        let removed = bucket.remove("k").unwrap();
        assert_eq!(removed.value, 2);
        assert_eq!(keys(&bucket), vec!["u", "a"]);
        assert!(bucket.remove("k").is_none());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut bucket = Bucket::with_entry(String::from("a"), 1);
        *bucket.get_mut("a").unwrap() = 10;
        assert_eq!(bucket.get("a"), Some(&10));
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn pop_any_drains() {
        let mut bucket = Bucket::with_entry(String::from("a"), 1);
        bucket.push_front(String::from("k"), 2);
        assert_eq!(bucket.pop_any().map(|e| e.value), Some(2));
        assert_eq!(bucket.pop_any().map(|e| e.value), Some(1));
        assert!(bucket.pop_any().is_none());
        assert!(bucket.is_empty());
    }
}
