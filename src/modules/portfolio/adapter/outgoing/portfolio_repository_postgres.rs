use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::portfolios::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

#[derive(Clone, Debug)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return PortfolioRepositoryError::AlreadyExists;
    }
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create_portfolio(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<Uuid, PortfolioRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            document: Set(document),
            is_published: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.id)
    }

    async fn update_document(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<(), PortfolioRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::Document, Expr::value(document))
            .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn set_published(
        &self,
        owner: UserId,
        is_published: bool,
    ) -> Result<bool, PortfolioRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::IsPublished, Expr::value(is_published))
            .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(is_published)
    }
}
