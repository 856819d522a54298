pub mod worker;

pub use worker::{ChatSnapshot, SyncCommand, SyncUpdate, SyncWorker};
