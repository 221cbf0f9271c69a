mod check_username;
mod update_username;

pub use check_username::{check_username_handler, __path_check_username_handler, CheckUsernameQuery};
pub use update_username::{update_username_handler, __path_update_username_handler, UpdateUsernameRequest, UpdateUsernameResponse};
