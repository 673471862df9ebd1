//! Post use cases: write, read, list, edit, delete and password check.

use std::sync::Arc;

use board_shared::dto::{PostDetail, PostEdit, PostSummary, PostWrite};

use crate::domain::{NewPost, Post};
use crate::error::{DomainError, RepoError};
use crate::ports::{PageRequest, PasswordService, PostRepository};

/// Posts per list page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Orchestrates post use cases over a repository and a password hasher.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
    page_size: u64,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        page_size: u64,
    ) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            posts,
            passwords,
            page_size,
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Hash the password, store the post and return its new id.
    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn write(&self, request: PostWrite) -> Result<i64, DomainError> {
        let password_hash = self.passwords.hash(&request.raw_password)?;

        let post = self
            .posts
            .insert(NewPost {
                username: request.username,
                password_hash,
                title: request.title,
                content: request.content,
            })
            .await?;

        tracing::info!(post_id = post.id, "post written");
        Ok(post.id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<PostDetail, DomainError> {
        let post = self.find_post(id).await?;
        Ok(post.into())
    }

    /// List one page of posts, newest first. Page numbers start at 1.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, page: u64) -> Result<Vec<PostSummary>, DomainError> {
        let posts = self
            .posts
            .find_page(PageRequest::newest_first(page, self.page_size))
            .await?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Replace title and content of an existing post.
    #[tracing::instrument(skip(self, request))]
    pub async fn edit(&self, id: i64, request: PostEdit) -> Result<i64, DomainError> {
        self.posts
            .update_content(id, request.title, request.content)
            .await
            .map_err(|e| not_found_or(e, id))?;

        tracing::info!(post_id = id, "post edited");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(|e| not_found_or(e, id))?;

        tracing::info!(post_id = id, "post deleted");
        Ok(())
    }

    /// Succeeds only when `raw_password` matches the post's stored hash.
    #[tracing::instrument(skip(self, raw_password))]
    pub async fn check_password(&self, id: i64, raw_password: &str) -> Result<(), DomainError> {
        let post = self.find_post(id).await?;

        if !self.passwords.verify(raw_password, &post.password_hash)? {
            tracing::debug!(post_id = id, "password mismatch");
            return Err(DomainError::IncorrectPassword);
        }

        Ok(())
    }

    async fn find_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}

fn not_found_or(err: RepoError, id: i64) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::post_not_found(id),
        other => other.into(),
    }
}
