pub mod code;
pub mod courses;
pub mod items;
pub mod summary;
