use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::portfolios::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioRecord,
};

#[derive(Clone, Debug)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: Model) -> PortfolioRecord {
    PortfolioRecord {
        id: model.id,
        owner: UserId::from(model.user_id),
        document: model.document,
        is_published: model.is_published,
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<PortfolioRecord>, PortfolioQueryError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| PortfolioQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(model_to_record))
    }
}
