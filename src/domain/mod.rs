//! Domain aggregates exposed by the service layer.

pub mod clothing_type;
pub mod customer;
pub mod expense;
pub mod inventory;
pub mod invoice;
pub mod service;
pub mod user;
