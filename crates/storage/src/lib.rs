#![forbid(unsafe_code)]

pub mod reports;
pub mod repository;
pub mod sqlite;

pub use reports::{
    CollectionSource, LoadedCollection, MalformedStoreError, REPORTS_KEY, ReportCollectionStore,
    ReportRecord,
};
pub use repository::{InMemoryRepository, KeyValueStore, Storage, StorageError};
