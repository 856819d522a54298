pub mod chat;
pub mod login;
pub mod peers;

pub use chat::render_chat;
pub use login::render_login;
pub use peers::render_peers;
