pub mod cache;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod directory;
pub mod models;
pub mod runtime;
pub mod session;
pub mod store;
pub mod sync;
pub mod view;

// Re-export the types a front-end needs at the crate root
pub use config::SyncConfig;
pub use runtime::{ChatRuntime, RuntimeHandle};
pub use session::{login, Session, SessionContext, ValidationError};
pub use sync::{ChatSnapshot, SyncCommand, SyncUpdate};
pub use view::LocalView;
