use board_shared::dto::{PostDetail, PostSummary};

/// Post entity - a single text post on the board.
///
/// `password_hash` is the salted hash of the author's password and is never
/// exposed through [`PostDetail`] or [`PostSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub title: String,
    pub content: String,
}

/// A post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub username: String,
    pub password_hash: String,
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i64) -> Post {
        Post {
            id,
            username: self.username,
            password_hash: self.password_hash,
            title: self.title,
            content: self.content,
        }
    }
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            username: post.username,
            title: post.title,
            content: post.content,
        }
    }
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            username: post.username,
            title: post.title,
        }
    }
}
