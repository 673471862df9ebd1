//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use board_core::domain::{NewPost, Post};
use board_core::error::RepoError;
use board_core::ports::{PageRequest, PostRepository, PostSortField, SortDirection};

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn sort_column(field: PostSortField) -> post::Column {
    match field {
        PostSortField::Id => post::Column::Id,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("violates") {
                RepoError::Constraint(err_str)
            } else {
                map_db_err(e)
            }
        })?;

        Ok(model.into())
    }

    async fn update_content(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(title))
            .col_expr(post::Column::Content, Expr::value(content))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Post>, RepoError> {
        // Postgres OFFSET/LIMIT are signed bigints.
        let offset = page.offset().min(i64::MAX as u64);
        let limit = page.size.min(i64::MAX as u64);
        tracing::debug!(page = page.number, offset, limit, "Fetching post page");

        let result = PostEntity::find()
            .order_by(sort_column(page.sort_field), sort_order(page.direction))
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
