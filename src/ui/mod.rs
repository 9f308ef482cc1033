pub mod messages;
pub mod render;
pub mod session;
pub mod terminal;
