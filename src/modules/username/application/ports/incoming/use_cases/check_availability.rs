use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnavailableReason {
    /// Fails the username rules; never looked up.
    Invalid,
    /// The lookup failed; the answer is unknown.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
}

impl Availability {
    pub fn known(available: bool) -> Self {
        Self {
            available,
            reason: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            available: false,
            reason: Some(UnavailableReason::Invalid),
        }
    }

    pub fn error() -> Self {
        Self {
            available: false,
            reason: Some(UnavailableReason::Error),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Never fails: every problem is folded into the `Availability` answer.
#[async_trait]
pub trait CheckUsernameAvailabilityUseCase: Send + Sync {
    async fn execute(&self, raw: &str) -> Availability;
}
