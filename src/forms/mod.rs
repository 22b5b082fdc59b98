//! Request payloads accepted by the API routes, validated before any
//! repository call.

pub mod auth;
pub mod clothing_type;
pub mod customer;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod service;
