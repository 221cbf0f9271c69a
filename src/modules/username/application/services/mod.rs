mod check_availability_service;
mod update_username_service;

pub use check_availability_service::CheckUsernameAvailabilityService;
pub use update_username_service::UpdateUsernameService;
