//! Typed queries per table.

pub mod files;
pub mod photos;
pub mod users;

pub use files::FileRepo;
pub use photos::PhotoRepo;
pub use users::UserRepo;
