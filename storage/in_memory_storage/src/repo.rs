//!

use super::error;

extern crate alloc;
use alloc::collections::BTreeMap;

///
pub trait Repository<V> {
    /// Keys in ascending order
    fn list(&self) -> Vec<String>;

    ///
    fn get(&self, id: &str) -> Option<V>;

    ///
    /// # Errors
    fn save(&mut self, id: String, value: V) -> error::Result<()>;

    /// Hands back the removed value, if there was one
    ///
    /// # Errors
    fn remove(&mut self, id: &str) -> error::Result<Option<V>>;
}

///
pub struct InMemoryRepository<V> {
    ///
    storage: BTreeMap<String, V>,
}

impl<V> InMemoryRepository<V> {
    ///
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: BTreeMap::new(),
        }
    }
}

impl<V> Default for InMemoryRepository<V> {
    ///
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<BTreeMap<String, V>> for InMemoryRepository<V> {
    #[inline]
    fn from(storage: BTreeMap<String, V>) -> Self {
        Self { storage }
    }
}

impl<V: Clone> Repository<V> for InMemoryRepository<V> {
    #[inline]
    fn list(&self) -> Vec<String> {
        self.storage
            .keys()
            .map(alloc::borrow::ToOwned::to_owned)
            .collect()
    }

    #[inline]
    fn get(&self, id: &str) -> Option<V> {
        self.storage.get(id).cloned()
    }

    #[inline]
    fn save(&mut self, id: String, value: V) -> error::Result<()> {
        self.storage.insert(id, value);
        Ok(())
    }

    #[inline]
    fn remove(&mut self, id: &str) -> error::Result<Option<V>> {
        Ok(self.storage.remove(id))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn save_get_remove() {
        let mut repo = InMemoryRepository::<u32>::new();

        repo.save("b".to_owned(), 2).expect("save");
        repo.save("a".to_owned(), 1).expect("save");
        repo.save("b".to_owned(), 3).expect("save");

        assert_eq!(vec!["a", "b"], repo.list());
        assert_eq!(Some(3), repo.get("b"));
        assert_eq!(Some(1), repo.remove("a").expect("remove"));
        assert_eq!(None, repo.remove("a").expect("remove"));
        assert_eq!(vec!["b"], repo.list());
    }
}
