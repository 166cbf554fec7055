//! Users service repositories

pub mod user;

pub use user::UserRepository;
