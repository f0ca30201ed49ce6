pub mod accounts;
pub mod commands;
pub mod http;
pub mod target;
