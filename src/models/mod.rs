pub mod input;
pub mod project_type;
pub mod setting;
pub mod tag;
pub mod work;

pub use project_type::ProjectType;
pub use setting::Setting;
pub use tag::Tag;
pub use work::WorkEntry;
