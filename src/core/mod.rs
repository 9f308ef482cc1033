pub mod export;
pub mod log;
pub mod project;
pub mod projection;
pub mod setting;
pub mod store;
pub mod tag;
pub mod ticker;
pub mod tracking;
pub mod view;
pub mod work;
