pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod records;
pub mod routes;
pub mod templates_structs;
