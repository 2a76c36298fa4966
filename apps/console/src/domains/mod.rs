pub mod auth;
pub mod config;
pub mod devices;
pub mod images;
pub mod locale;
pub mod permissions;
pub mod reg_codes;
pub mod roles;
pub mod users;
