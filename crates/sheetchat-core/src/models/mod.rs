pub mod handle;
pub mod message;
pub mod participant;

pub use handle::Handle;
pub use message::{parse_messages, Message};
pub use participant::{parse_directory, Participant};
