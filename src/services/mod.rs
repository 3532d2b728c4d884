pub mod command_service;
pub mod password_service;
