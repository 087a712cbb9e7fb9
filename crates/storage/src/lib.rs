#![forbid(unsafe_code)]

pub mod cache;
pub mod repository;

pub use cache::{MATCHES_KEY, MatchCache};
pub use repository::{InMemorySessionStorage, SessionStorage, Storage, StorageError};
