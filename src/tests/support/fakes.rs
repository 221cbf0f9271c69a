//! In-memory port implementations for service tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioRecord, PortfolioRepository,
    PortfolioRepositoryError,
};

/// Backs both portfolio ports with one shared map, like a single table.
#[derive(Clone, Default)]
pub struct InMemoryPortfolios {
    rows: Arc<Mutex<HashMap<UserId, PortfolioRecord>>>,
    failing: Arc<Mutex<bool>>,
}

impl InMemoryPortfolios {
    pub fn with(record: PortfolioRecord) -> Self {
        let store = Self::default();
        store.rows.lock().unwrap().insert(record.owner, record);
        store
    }

    /// Every later call returns a database error.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn get(&self, owner: UserId) -> Option<PortfolioRecord> {
        self.rows.lock().unwrap().get(&owner).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), String> {
        if *self.failing.lock().unwrap() {
            Err("connection refused".to_string())
        } else {
            Ok(())
        }
    }
}

pub fn record(owner: UserId, document: Value, is_published: bool) -> PortfolioRecord {
    PortfolioRecord {
        id: Uuid::new_v4(),
        owner,
        document,
        is_published,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl PortfolioQuery for InMemoryPortfolios {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<PortfolioRecord>, PortfolioQueryError> {
        self.check().map_err(PortfolioQueryError::DatabaseError)?;
        Ok(self.get(owner))
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolios {
    async fn create_portfolio(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<Uuid, PortfolioRepositoryError> {
        self.check().map_err(PortfolioRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&owner) {
            return Err(PortfolioRepositoryError::AlreadyExists);
        }
        let row = record(owner, document, false);
        let id = row.id;
        rows.insert(owner, row);
        Ok(id)
    }

    async fn update_document(
        &self,
        owner: UserId,
        document: Value,
    ) -> Result<(), PortfolioRepositoryError> {
        self.check().map_err(PortfolioRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&owner)
            .ok_or(PortfolioRepositoryError::NotFound)?;
        row.document = document;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn set_published(
        &self,
        owner: UserId,
        is_published: bool,
    ) -> Result<bool, PortfolioRepositoryError> {
        self.check().map_err(PortfolioRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&owner)
            .ok_or(PortfolioRepositoryError::NotFound)?;
        row.is_published = is_published;
        Ok(row.is_published)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<UserQueryResult>>>,
}

impl InMemoryUsers {
    pub fn with(username: &str) -> (Self, UserId) {
        let id = UserId::from(Uuid::new_v4());
        let users = Self::default();
        users.users.lock().unwrap().push(UserQueryResult {
            id,
            email: format!("{username}@example.com"),
            username: username.to_string(),
            created_at: Utc::now(),
        });
        (users, id)
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}
