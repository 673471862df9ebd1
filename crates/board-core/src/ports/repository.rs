use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining the storage operations shared by entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Delete every entity, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;

    /// Count stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Persist a new post and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title and content. Fails with [`RepoError::NotFound`] if absent.
    async fn update_content(&self, id: i64, title: String, content: String)
    -> Result<(), RepoError>;

    /// Fetch one page of posts.
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Post>, RepoError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Page selection passed to [`PostRepository::find_page`].
///
/// `number` is 1-based; values below 1 select the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
    pub sort_field: PostSortField,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Newest-first page of posts.
    pub fn newest_first(number: u64, size: u64) -> Self {
        Self {
            number: number.max(1),
            size,
            sort_field: PostSortField::Id,
            direction: SortDirection::Desc,
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.number.max(1).saturating_sub(1).saturating_mul(self.size)
    }
}
