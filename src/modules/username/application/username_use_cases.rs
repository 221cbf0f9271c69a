use std::sync::Arc;

use crate::modules::username::application::ports::incoming::use_cases::{
    CheckUsernameAvailabilityUseCase, UpdateUsernameUseCase,
};

#[derive(Clone)]
pub struct UsernameUseCases {
    pub check: Arc<dyn CheckUsernameAvailabilityUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUsernameUseCase + Send + Sync>,
}
