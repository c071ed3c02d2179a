//! Sync and list orchestration

mod engine;

pub use engine::{
    RepoStatus, SecretStatus, SecretSync, Selection, SyncAction, SyncEngine, SyncError,
    SyncOutcome, SyncReport,
};
