use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// A stored portfolio row. `document` is whatever was persisted and may
/// still be in the legacy array shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioRecord {
    pub id: Uuid,
    pub owner: UserId,
    pub document: Value,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn find_by_owner(&self, owner: UserId)
        -> Result<Option<PortfolioRecord>, PortfolioQueryError>;
}
