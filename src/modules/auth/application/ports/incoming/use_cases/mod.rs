mod register_user;

pub use register_user::{RegisterUserError, RegisterUserUseCase, RegisteredUser};
