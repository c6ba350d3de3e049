#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    ChangeFeed, InMemoryStore, KeyValueStore, ObservedStore, Storage, StorageError, StoreChange,
};
