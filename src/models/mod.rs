//! Database models shared across the repository layer.

pub mod auth;
pub mod clothing_type;
pub mod config;
pub mod customer;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod service;
pub mod user;
