//! HTTP handlers, one module per controller.

pub mod auth;
pub mod files;
pub mod greeting;
pub mod photos;
pub mod transfer;
pub mod users;
