//! Typed client for the Vidhan Bhavan REST backend.
//!
//! The backend owns all durable state; this module is the only place
//! that talks to it. Collection endpoints have drifted across backend
//! revisions and may answer `{ success, data: { <key>: [...] } }`,
//! `{ <key>: [...] }`, or a bare array — the client accepts all three
//! so the drift never leaks into handlers or templates.

mod client;
mod error;

pub use client::{ApiClient, AuthUser};
pub use error::ApiError;
