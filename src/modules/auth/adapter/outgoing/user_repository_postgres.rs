use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

fn is_unique_violation(err_str: &str) -> bool {
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

/// Postgres names the violated index in the message, e.g.
/// `idx_users_username_unique`.
fn map_write_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if is_unique_violation(&err_str) {
        if err_str.contains("username") {
            return UserRepositoryError::UsernameAlreadyExists;
        }
        return UserRepositoryError::EmailAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_write_error)?;

        Ok(Self::map_to_user(inserted))
    }

    async fn update_username(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Username, Expr::value(username))
            .col_expr(UserColumn::UpdatedAt, Expr::current_timestamp().into())
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_user() -> NewUser {
        NewUser {
            username: "ada_l".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    fn user_model() -> UserModel {
        let now = Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            username: "ada_l".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let model = user_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo.create_user(new_user()).await.unwrap();

        assert_eq!(user.id.value(), model.id);
        assert_eq!(user.username, "ada_l");
        assert_eq!(user.password_hash, "hashed_password");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_username_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_user(new_user()).await.unwrap_err();

        assert_eq!(err, UserRepositoryError::UsernameAlreadyExists);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_email_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_user(new_user()).await.unwrap_err();

        assert_eq!(err, UserRepositoryError::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_user(new_user()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::DatabaseError(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_update_username_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_username(UserId::from(Uuid::new_v4()), "grace_h")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_username_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update_username(UserId::from(Uuid::new_v4()), "grace_h")
            .await
            .unwrap_err();

        assert_eq!(err, UserRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_update_username_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_username_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update_username(UserId::from(Uuid::new_v4()), "grace_h")
            .await
            .unwrap_err();

        assert_eq!(err, UserRepositoryError::UsernameAlreadyExists);
    }
}
