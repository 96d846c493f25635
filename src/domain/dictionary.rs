use std::collections::BTreeMap;

/// String-keyed lookup table.
/// Iteration with `each` visits entries in key order, so anything built on
/// top of it stays deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary<V> {
    values: BTreeMap<String, V>,
}

impl<V> Dictionary<V> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Build from name/value pairs; later duplicates overwrite earlier ones
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn store(&mut self, name: impl Into<String>, value: V) {
        self.values.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Call `action` for every entry
    pub fn each(&self, mut action: impl FnMut(&str, &V)) {
        self.values.iter().for_each(|(k, v)| action(k, v));
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.values.values()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V> Default for Dictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_lookup() {
        let mut dict = Dictionary::new();
        dict.store("s", 1);
        assert_eq!(dict.lookup("s"), Some(&1));
        assert_eq!(dict.lookup("n"), None);
    }

    #[test]
    fn test_store_overwrites() {
        let mut dict = Dictionary::new();
        dict.store("s", 1);
        dict.store("s", 2);
        assert_eq!(dict.lookup("s"), Some(&2));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_contains_only_stored_names() {
        let dict = Dictionary::from_pairs([("e", ()), ("w", ())]);
        assert!(dict.contains("e"));
        // Inherited-looking names are not entries
        assert!(!dict.contains("toString"));
    }

    #[test]
    fn test_each_visits_in_key_order() {
        let dict = Dictionary::from_pairs([("b", 2), ("a", 1), ("c", 3)]);
        let mut seen = Vec::new();
        dict.each(|name, value| seen.push((name.to_string(), *value)));
        assert_eq!(
            seen,
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
        );
    }
}
