pub mod get_user;
pub mod get_users;
pub mod toggle_user_active;
