//! Business rules on top of the repo layer.

pub mod auth;
pub mod photos;
pub mod transfer;

pub use auth::AuthService;
pub use photos::PhotoService;
pub use transfer::TransferService;
