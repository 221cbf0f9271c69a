pub mod availability_cache;
pub mod ports;
pub mod services;
pub mod username_use_cases;
