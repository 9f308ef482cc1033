pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod project_repo;
pub mod setting_repo;
pub mod store;
pub mod tag_repo;
pub mod work_repo;

pub use store::SqliteStore;
