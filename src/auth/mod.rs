pub mod csrf;
pub mod middleware;
pub mod pending;
pub mod session;
