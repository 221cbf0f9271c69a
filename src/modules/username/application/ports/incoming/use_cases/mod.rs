mod check_availability;
mod update_username;

pub use check_availability::{Availability, CheckUsernameAvailabilityUseCase, UnavailableReason};
pub use update_username::{UpdateUsernameError, UpdateUsernameUseCase};
