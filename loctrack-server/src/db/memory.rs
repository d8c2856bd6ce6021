//! In-process location store
//!
//! Backs `serve --in-memory` and the router tests. Ids come from a counter
//! guarded by the same lock as the rows, so concurrent creates never share one.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DbError, LocationStore};
use crate::models::{Location, NewLocation, Pagination};

#[derive(Default)]
struct Inner {
    rows: Vec<Location>,
    next_id: i32,
}

/// Location store kept in memory, insertion-ordered
#[derive(Default)]
pub struct MemoryLocationStore {
    inner: Mutex<Inner>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn create(&self, new: NewLocation) -> Result<Location, DbError> {
        let mut inner = self.inner.lock().await;
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| DbError::Unavailable("id sequence exhausted".into()))?;
        let location = new.with_id(inner.next_id);
        inner.rows.push(location.clone());
        Ok(location)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Location>, DbError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<Location>, DbError> {
        Ok(self.inner.lock().await.rows.clone())
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let mut inner = self.inner.lock().await;
        let removed = inner.rows.len() as u64;
        inner.rows.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn point(name: &str) -> NewLocation {
        NewLocation {
            name: name.into(),
            category: "Park".into(),
            latitude: 40.0,
            longitude: -73.0,
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let store = MemoryLocationStore::new();
        let created = store.create(point("A")).await.unwrap();
        let listed = store.list(Pagination::default()).await.unwrap();
        assert_eq!(listed, vec![created]);
        assert!(listed[0].id > 0);
    }

    #[tokio::test]
    async fn list_window() {
        let store = MemoryLocationStore::new();
        for i in 0..10 {
            store.create(point(&format!("p{}", i))).await.unwrap();
        }

        let page = store.list(Pagination::new(3, 4)).await.unwrap();
        let names: Vec<_> = page.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["p3", "p4", "p5", "p6"]);

        assert!(store.list(Pagination::new(8, 5)).await.unwrap().len() == 2);
        assert!(store.list(Pagination::new(20, 5)).await.unwrap().is_empty());
        assert!(store.list(Pagination::new(0, 0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_all_empties_store() {
        let store = MemoryLocationStore::new();
        store.create(point("A")).await.unwrap();
        store.create(point("B")).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.list(Pagination::default()).await.unwrap().is_empty());
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let store = MemoryLocationStore::new();
        let first = store.create(point("A")).await.unwrap();
        store.delete_all().await.unwrap();
        let second = store.create(point("B")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryLocationStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(point(&format!("p{}", i))).await.unwrap().id })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.expect("task panicked")));
        }
        assert_eq!(ids.len(), 50);
    }
}
