//! User storage
//!
//! Provides the [`UserStore`] contract and its implementations.

pub mod memory;
pub mod user;

pub use memory::InMemoryUserStore;
pub use user::{NewUser, PgUserStore, UserRecord, UserStore};
