pub mod app_state;
pub mod claim;
pub mod command;
pub mod configuration;
pub mod discord;
pub mod errors;
pub mod login_info;
pub mod quiz;
