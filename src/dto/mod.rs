//! Response payloads returned by the API routes.

pub mod analytics;
pub mod auth;
pub mod invoice;
