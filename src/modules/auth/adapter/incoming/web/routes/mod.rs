mod register_user;

pub use register_user::{register_user_handler, __path_register_user_handler, RegisterUserRequest};
