//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::{NewPost, Post};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PageRequest, PostRepository, PostSortField, SortDirection};

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Post>,
    last_id: i64,
}

/// In-memory post storage using a BTreeMap keyed by id with async RwLock.
///
/// Ids are handed out under the write lock and never reused, even after
/// deletes. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.rows.len() as u64;
        store.rows.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.rows.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let post = post.with_id(store.last_id);
        store.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_content(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.title = title;
        post.content = content;
        Ok(())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);

        // Rows are keyed by id, so map order is id order.
        let rows: Box<dyn Iterator<Item = &Post>> = match (page.sort_field, page.direction) {
            (PostSortField::Id, SortDirection::Asc) => Box::new(store.rows.values()),
            (PostSortField::Id, SortDirection::Desc) => Box::new(store.rows.values().rev()),
        };

        Ok(rows.skip(offset).take(size).cloned().collect())
    }
}
