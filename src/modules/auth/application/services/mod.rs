mod register_user_service;

pub use register_user_service::RegisterUserService;
