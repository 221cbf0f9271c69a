use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::auth::application::domain::credentials::{Username, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::username::application::availability_cache::AvailabilityCache;
use crate::modules::username::application::ports::incoming::use_cases::{
    Availability, CheckUsernameAvailabilityUseCase,
};

pub struct CheckUsernameAvailabilityService<Q>
where
    Q: UserQuery,
{
    query: Q,
    cache: Arc<AvailabilityCache>,
}

impl<Q> CheckUsernameAvailabilityService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, cache: Arc<AvailabilityCache>) -> Self {
        Self { query, cache }
    }
}

#[async_trait]
impl<Q> CheckUsernameAvailabilityUseCase for CheckUsernameAvailabilityService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, raw: &str) -> Availability {
        let candidate = raw.trim();

        // Cheap length gate before the pattern match
        let len = candidate.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Availability::invalid();
        }

        let Ok(username) = Username::parse(candidate) else {
            return Availability::invalid();
        };

        if let Some(available) = self.cache.get(username.as_str()) {
            return Availability::known(available);
        }

        match self.query.find_by_username(username.as_str()).await {
            Ok(existing) => {
                let available = existing.is_none();
                self.cache.put(username.as_str(), available);
                debug!(username = %username, available, "Username looked up");
                Availability::known(available)
            }
            Err(e) => {
                error!(username = %username, error = %e, "Username lookup failed");
                Availability::error()
            }
        }
    }
}
