pub mod clock;
pub mod colors;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;

pub use time::{format_time, format_with_person_day};
